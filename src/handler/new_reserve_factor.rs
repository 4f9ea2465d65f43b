use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::math::mantissa_to_decimal,
    types::{EventMeta, NewReserveFactor_Type},
};

use super::lookup::load_market;

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: NewReserveFactor_Type,
) -> Result<(), Error> {
    let Some(mut market) =
        load_market(app_state, &meta.address, "handle_new_reserve_factor")
            .await?
    else {
        return Ok(());
    };

    market.reserve_factor =
        mantissa_to_decimal(&item.new_reserve_factor_mantissa);

    app_state.store.save(&market).await
}
