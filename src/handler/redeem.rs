use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{buckets::event_id, enums::EventType, math::amount_to_decimal},
    model::Withdraw,
    types::{EventMeta, Redeem_Type},
};

use super::{
    lookup::load_market_with_underlying, protocol::get_or_create_protocol,
    snapshots::update_market_snapshots, usage::snapshot_usage,
};

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: Redeem_Type,
) -> Result<(), Error> {
    let market_id = &meta.address;
    let id = event_id(&meta.transaction_hash, meta.log_index);

    if app_state.store.exists::<Withdraw>(&id).await? {
        info!("[handle_redeem] Withdraw {} already recorded", id);
        return Ok(());
    }

    let Some((mut market, underlying)) =
        load_market_with_underlying(app_state, market_id, "handle_redeem")
            .await?
    else {
        return Ok(());
    };

    let mut protocol =
        get_or_create_protocol(app_state, meta.block_number).await?;

    let amount_usd =
        amount_to_decimal(&item.redeem_amount, underlying.decimals)
            * &market.input_token_price_usd;

    let withdraw = Withdraw {
        id,
        hash: meta.transaction_hash.to_owned(),
        log_index: meta.log_index,
        protocol: protocol.id.to_owned(),
        to: item.redeemer.to_owned(),
        from: market_id.to_owned(),
        block_number: meta.block_number,
        timestamp: meta.block_timestamp,
        market: market_id.to_owned(),
        asset: market.input_token.to_owned(),
        amount: item.redeem_amount.clone(),
        amount_usd: amount_usd.clone(),
    };
    app_state.store.save(&withdraw).await?;

    market.input_token_balance -= &item.redeem_amount;
    app_state.store.save(&market).await?;

    update_market_snapshots(
        app_state,
        &market,
        meta.block_number,
        meta.block_timestamp,
        &amount_usd,
        EventType::Withdraw,
    )
    .await?;

    snapshot_usage(
        app_state,
        &mut protocol,
        meta.block_number,
        meta.block_timestamp,
        &item.redeemer,
        EventType::Withdraw,
    )
    .await
}
