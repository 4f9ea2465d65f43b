use bigdecimal::BigDecimal;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        buckets::{
            financials_daily_snapshot_id, market_daily_snapshot_id,
            market_hourly_snapshot_id,
        },
        enums::EventType,
    },
    model::{
        Daily_Flows, Financials_Daily_Snapshot, Hourly_Flows,
        Lending_Protocol, Market, Market_Daily_Snapshot,
        Market_Hourly_Snapshot, Market_Totals,
    },
};

use super::{
    lookup::{load_market, load_markets},
    market_state::Revenue_Deltas,
};

/// Loads the daily snapshot for the bucket of `block_timestamp`, or starts
/// an empty one, and refreshes its point-in-time fields from `market`.
async fn load_daily(
    app_state: &AppState<State>,
    market: &Market,
    block_number: i64,
    block_timestamp: i64,
) -> Result<Market_Daily_Snapshot, Error> {
    let id = market_daily_snapshot_id(&market.id, block_timestamp);
    let mut snapshot = match app_state
        .store
        .load::<Market_Daily_Snapshot>(&id)
        .await?
    {
        Some(snapshot) => snapshot,
        None => Market_Daily_Snapshot {
            id,
            protocol: market.protocol.to_owned(),
            market: market.id.to_owned(),
            block_number,
            timestamp: block_timestamp,
            totals: Market_Totals::from(market),
            flows: Daily_Flows::default(),
        },
    };

    snapshot.totals = Market_Totals::from(market);
    snapshot.block_number = block_number;
    snapshot.timestamp = block_timestamp;

    Ok(snapshot)
}

async fn load_hourly(
    app_state: &AppState<State>,
    market: &Market,
    block_number: i64,
    block_timestamp: i64,
) -> Result<Market_Hourly_Snapshot, Error> {
    let id = market_hourly_snapshot_id(&market.id, block_timestamp);
    let mut snapshot = match app_state
        .store
        .load::<Market_Hourly_Snapshot>(&id)
        .await?
    {
        Some(snapshot) => snapshot,
        None => Market_Hourly_Snapshot {
            id,
            protocol: market.protocol.to_owned(),
            market: market.id.to_owned(),
            block_number,
            timestamp: block_timestamp,
            totals: Market_Totals::from(market),
            flows: Hourly_Flows::default(),
        },
    };

    snapshot.totals = Market_Totals::from(market);
    snapshot.block_number = block_number;
    snapshot.timestamp = block_timestamp;

    Ok(snapshot)
}

/// Adds a user action's USD flow to both market snapshots of its bucket.
pub async fn update_market_snapshots(
    app_state: &AppState<State>,
    market: &Market,
    block_number: i64,
    block_timestamp: i64,
    amount_usd: &BigDecimal,
    event_type: EventType,
) -> Result<(), Error> {
    let mut hourly =
        load_hourly(app_state, market, block_number, block_timestamp).await?;
    hourly.flows.record(event_type, amount_usd);
    app_state.store.save(&hourly).await?;

    let mut daily =
        load_daily(app_state, market, block_number, block_timestamp).await?;
    daily.flows.record(event_type, amount_usd);
    app_state.store.save(&daily).await
}

pub async fn add_daily_revenue(
    app_state: &AppState<State>,
    market: &Market,
    block_number: i64,
    block_timestamp: i64,
    deltas: &Revenue_Deltas,
) -> Result<(), Error> {
    let mut daily =
        load_daily(app_state, market, block_number, block_timestamp).await?;

    daily.flows.total_revenue_usd += &deltas.total_usd;
    daily.flows.protocol_side_revenue_usd += &deltas.protocol_side_usd;
    daily.flows.supply_side_revenue_usd += &deltas.supply_side_usd;

    app_state.store.save(&daily).await
}

/// Copies the market's current state into its hourly and daily snapshots.
pub async fn snapshot_market(
    app_state: &AppState<State>,
    market_id: &str,
    block_number: i64,
    block_timestamp: i64,
) -> Result<(), Error> {
    let Some(market) =
        load_market(app_state, market_id, "snapshot_market").await?
    else {
        return Ok(());
    };

    let daily =
        load_daily(app_state, &market, block_number, block_timestamp).await?;
    app_state.store.save(&daily).await?;

    let hourly =
        load_hourly(app_state, &market, block_number, block_timestamp).await?;
    app_state.store.save(&hourly).await
}

/// Protocol totals plus the day's flows summed over every market's daily
/// snapshot.
pub async fn snapshot_financials(
    app_state: &AppState<State>,
    protocol: &Lending_Protocol,
    block_number: i64,
    block_timestamp: i64,
) -> Result<(), Error> {
    let markets =
        load_markets(app_state, &protocol.market_ids, "snapshot_financials")
            .await?;

    let mut flows = Daily_Flows::default();
    for market in &markets {
        let id = market_daily_snapshot_id(&market.id, block_timestamp);
        if let Some(snapshot) = app_state
            .store
            .load::<Market_Daily_Snapshot>(&id)
            .await?
        {
            flows = flows.add(&snapshot.flows);
        }
    }

    let snapshot = Financials_Daily_Snapshot {
        id: financials_daily_snapshot_id(block_timestamp),
        protocol: protocol.id.to_owned(),
        block_number,
        timestamp: block_timestamp,
        totals: protocol.totals.clone(),
        flows,
    };

    app_state.store.save(&snapshot).await
}
