use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::math::mantissa_to_percentage,
    types::{EventMeta, NewLiquidationIncentive_Type},
};

use super::{lookup::load_markets, protocol::get_or_create_protocol};

/// Updates the protocol incentive and the penalty of every listed market.
pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: NewLiquidationIncentive_Type,
) -> Result<(), Error> {
    let mut protocol =
        get_or_create_protocol(app_state, meta.block_number).await?;
    let incentive =
        mantissa_to_percentage(&item.new_liquidation_incentive_mantissa);

    protocol.liquidation_incentive = incentive.clone();
    app_state.store.save(&protocol).await?;

    let markets = load_markets(
        app_state,
        &protocol.market_ids,
        "handle_new_liquidation_incentive",
    )
    .await?;

    for mut market in markets {
        market.liquidation_penalty = incentive.clone();
        app_state.store.save(&market).await?;
    }

    Ok(())
}
