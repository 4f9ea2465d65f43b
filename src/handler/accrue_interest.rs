use crate::{
    configuration::{AppState, State},
    error::Error,
    types::{AccrueInterest_Type, EventMeta},
};

use super::{
    market_state::update_market,
    protocol::load_protocol,
    protocol_state::update_protocol,
    snapshots::{snapshot_financials, snapshot_market},
};

/// Accrual drives the whole engine: market state, protocol totals, then
/// the market and financials snapshots of the event's bucket.
pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    _item: AccrueInterest_Type,
) -> Result<(), Error> {
    let Some(mut protocol) =
        load_protocol(app_state, "handle_accrue_interest").await?
    else {
        return Ok(());
    };

    let applied = update_market(
        app_state,
        &protocol,
        &meta.address,
        meta.block_number,
        meta.block_timestamp,
    )
    .await?;

    if !applied {
        return Ok(());
    }

    update_protocol(app_state, &mut protocol).await?;
    snapshot_market(
        app_state,
        &meta.address,
        meta.block_number,
        meta.block_timestamp,
    )
    .await?;
    snapshot_financials(
        app_state,
        &protocol,
        meta.block_number,
        meta.block_timestamp,
    )
    .await
}
