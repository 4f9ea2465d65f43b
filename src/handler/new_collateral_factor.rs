use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::math::mantissa_to_percentage,
    types::{EventMeta, NewCollateralFactor_Type},
};

use super::lookup::load_market;

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    _meta: &EventMeta,
    item: NewCollateralFactor_Type,
) -> Result<(), Error> {
    let Some(mut market) =
        load_market(app_state, &item.ctoken, "handle_new_collateral_factor")
            .await?
    else {
        return Ok(());
    };

    let collateral_factor =
        mantissa_to_percentage(&item.new_collateral_factor_mantissa);
    market.maximum_ltv = collateral_factor.clone();
    market.liquidation_threshold = collateral_factor;

    app_state.store.save(&market).await
}
