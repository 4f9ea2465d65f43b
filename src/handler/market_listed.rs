use bigdecimal::{BigDecimal, Zero};
use tracing::{info, warn};

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        enums::{InterestRateSide, InterestRateType},
        math::{mantissa_to_decimal, CTOKEN_DECIMALS, MANTISSA_FACTOR},
    },
    model::{Interest_Rate, Market, Token},
    types::{EventMeta, MarketListed_Type},
};

use super::protocol::get_or_create_protocol;

const UNKNOWN: &str = "unknown";

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: MarketListed_Type,
) -> Result<(), Error> {
    let store = &app_state.store;
    let chain = &app_state.chain;
    let config = &app_state.config;
    let market_id = item.ctoken;
    let block_number = meta.block_number;

    if store.exists::<Token>(&market_id).await? {
        return Ok(());
    }

    let is_native = app_state.is_native_market(&market_id);

    let underlying_id = if is_native {
        config.native_token_address.to_owned()
    } else {
        match chain.underlying(&market_id, block_number).await.ok() {
            Some(address) => address,
            None => {
                warn!(
                    "[handle_market_listed] could not fetch underlying token of market: {}",
                    market_id
                );
                return Ok(());
            },
        }
    };

    let share_token = if is_native {
        Token {
            id: market_id.to_owned(),
            name: config.native_market_name.to_owned(),
            symbol: config.native_market_symbol.to_owned(),
            decimals: CTOKEN_DECIMALS,
            last_price_usd: None,
            last_price_block_number: None,
        }
    } else {
        Token {
            id: market_id.to_owned(),
            name: chain
                .name(&market_id, block_number)
                .await
                .value_or(String::from(UNKNOWN)),
            symbol: chain
                .symbol(&market_id, block_number)
                .await
                .value_or(String::from(UNKNOWN)),
            decimals: CTOKEN_DECIMALS,
            last_price_usd: None,
            last_price_block_number: None,
        }
    };
    store.save(&share_token).await?;

    if !store.exists::<Token>(&underlying_id).await? {
        let underlying = if is_native {
            Token {
                id: underlying_id.to_owned(),
                name: config.native_token_name.to_owned(),
                symbol: config.native_token_symbol.to_owned(),
                decimals: MANTISSA_FACTOR,
                last_price_usd: None,
                last_price_block_number: None,
            }
        } else {
            Token {
                id: underlying_id.to_owned(),
                name: chain
                    .name(&underlying_id, block_number)
                    .await
                    .value_or(String::from(UNKNOWN)),
                symbol: chain
                    .symbol(&underlying_id, block_number)
                    .await
                    .value_or(String::from(UNKNOWN)),
                decimals: chain
                    .decimals(&underlying_id, block_number)
                    .await
                    .value_or_default(),
                last_price_usd: None,
                last_price_block_number: None,
            }
        };
        store.save(&underlying).await?;
    }

    let mut protocol = get_or_create_protocol(app_state, block_number).await?;

    let mut rates = Vec::with_capacity(2);
    for side in [InterestRateSide::Lender, InterestRateSide::Borrower] {
        let rate = Interest_Rate {
            id: Interest_Rate::make_id(
                side,
                InterestRateType::Variable,
                &market_id,
            ),
            side,
            r#type: InterestRateType::Variable,
            rate: BigDecimal::zero(),
        };
        store.save(&rate).await?;
        rates.push(rate.id);
    }

    let reserve_factor = chain
        .reserve_factor_mantissa(&market_id, block_number)
        .await
        .ok()
        .map(|raw| mantissa_to_decimal(&raw))
        .unwrap_or_else(BigDecimal::zero);

    let market = Market {
        id: market_id.to_owned(),
        name: share_token.name,
        protocol: protocol.id.to_owned(),
        input_token: underlying_id,
        output_token: share_token.id,
        rates,
        is_active: true,
        can_use_as_collateral: true,
        can_borrow_from: true,
        maximum_ltv: BigDecimal::zero(),
        liquidation_threshold: BigDecimal::zero(),
        liquidation_penalty: protocol.liquidation_incentive.clone(),
        reserve_factor,
        created_timestamp: meta.block_timestamp,
        created_block_number: block_number,
        input_token_balance: BigDecimal::zero(),
        output_token_supply: BigDecimal::zero(),
        input_token_price_usd: BigDecimal::zero(),
        output_token_price_usd: BigDecimal::zero(),
        exchange_rate: None,
        total_value_locked_usd: BigDecimal::zero(),
        total_deposit_balance_usd: BigDecimal::zero(),
        total_borrow_balance_usd: BigDecimal::zero(),
        cumulative_deposit_usd: BigDecimal::zero(),
        cumulative_borrow_usd: BigDecimal::zero(),
        cumulative_liquidate_usd: BigDecimal::zero(),
        cumulative_total_revenue_usd: BigDecimal::zero(),
        cumulative_protocol_side_revenue_usd: BigDecimal::zero(),
        cumulative_supply_side_revenue_usd: BigDecimal::zero(),
        accrual_timestamp: meta.block_timestamp,
    };
    store.save(&market).await?;

    protocol.market_ids.push(market.id.to_owned());
    store.save(&protocol).await?;

    info!("Market {} listed at block {}", market.id, block_number);

    Ok(())
}
