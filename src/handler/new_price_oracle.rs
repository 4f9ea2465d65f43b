use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::{EventMeta, NewPriceOracle_Type},
};

use super::protocol::get_or_create_protocol;

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: NewPriceOracle_Type,
) -> Result<(), Error> {
    let mut protocol =
        get_or_create_protocol(app_state, meta.block_number).await?;

    info!(
        "Price oracle changed from {} to {}",
        item.old_price_oracle, item.new_price_oracle
    );

    protocol.price_oracle = Some(item.new_price_oracle);
    app_state.store.save(&protocol).await
}
