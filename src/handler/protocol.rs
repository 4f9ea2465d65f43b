use bigdecimal::{BigDecimal, Zero};
use tracing::{error, warn};

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        enums::{LendingType, ProtocolType, RiskType},
        math::mantissa_to_percentage,
    },
    model::{Lending_Protocol, Protocol_Totals},
};

/// Loads the protocol singleton, creating it on first reference.
pub async fn get_or_create_protocol(
    app_state: &AppState<State>,
    block_number: i64,
) -> Result<Lending_Protocol, Error> {
    let config = &app_state.config;

    if let Some(protocol) = app_state
        .store
        .load::<Lending_Protocol>(&config.controller_address)
        .await?
    {
        return Ok(protocol);
    }

    let incentive = app_state
        .chain
        .liquidation_incentive_mantissa(&config.controller_address, block_number)
        .await;

    if incentive.is_reverted() {
        warn!(
            "[get_or_create_protocol] Failed to get liquidation incentive of {}",
            config.controller_address
        );
    }

    let protocol = Lending_Protocol {
        id: config.controller_address.to_owned(),
        name: config.protocol_name.to_owned(),
        slug: config.protocol_slug.to_owned(),
        schema_version: config.schema_version.to_owned(),
        subgraph_version: config.subgraph_version.to_owned(),
        methodology_version: config.methodology_version.to_owned(),
        network: config.network,
        r#type: ProtocolType::Lending,
        lending_type: LendingType::Pooled,
        risk_type: RiskType::Global,
        price_oracle: None,
        liquidation_incentive: mantissa_to_percentage(
            &incentive.value_or(BigDecimal::zero()),
        ),
        market_ids: vec![],
        totals: Protocol_Totals::default(),
        cumulative_unique_users: 0,
    };

    app_state.store.save(&protocol).await?;

    Ok(protocol)
}

/// Loads the protocol singleton for aggregation paths, where a missing
/// protocol means events arrived before any market listing.
pub async fn load_protocol(
    app_state: &AppState<State>,
    caller: &str,
) -> Result<Option<Lending_Protocol>, Error> {
    let protocol = app_state
        .store
        .load::<Lending_Protocol>(&app_state.config.controller_address)
        .await?;

    if protocol.is_none() {
        error!("[{}] Protocol not found, this SHOULD NOT happen", caller);
    }

    Ok(protocol)
}
