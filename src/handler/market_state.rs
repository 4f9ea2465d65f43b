use bigdecimal::{BigDecimal, Zero};
use tracing::warn;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        enums::InterestRateSide,
        math::{
            amount_to_decimal, exchange_rate_to_decimal, mantissa_to_decimal,
            oracle_price_to_decimal, rate_per_period_to_apy, CTOKEN_DECIMALS,
        },
    },
    model::{Interest_Rate, Lending_Protocol, Market},
    types::CallResult,
};

use super::{lookup::load_market_with_underlying, snapshots};

/// Revenue earned by one market between two accruals, in USD.
#[derive(Debug, Clone, PartialEq)]
pub struct Revenue_Deltas {
    pub total_usd: BigDecimal,
    pub protocol_side_usd: BigDecimal,
    pub supply_side_usd: BigDecimal,
}

/// `borrow_rate` is the per-period fraction, not the raw mantissa.
pub fn accrue_revenue(
    total_borrow_usd: &BigDecimal,
    borrow_rate: &BigDecimal,
    elapsed: i64,
    reserve_factor: &BigDecimal,
) -> Revenue_Deltas {
    let per_period = total_borrow_usd * borrow_rate;
    let total_usd = per_period * BigDecimal::from(elapsed);
    let protocol_side_usd = &total_usd * reserve_factor;
    let supply_side_usd = &total_usd - &protocol_side_usd;

    Revenue_Deltas {
        total_usd,
        protocol_side_usd,
        supply_side_usd,
    }
}

/// Recomputes the live state of a market as of `block_timestamp`.
/// Returns `false` when nothing was applied, either because the accrual
/// was already seen or because the market is unknown.
pub async fn update_market(
    app_state: &AppState<State>,
    protocol: &Lending_Protocol,
    market_id: &str,
    block_number: i64,
    block_timestamp: i64,
) -> Result<bool, Error> {
    let Some((mut market, mut underlying)) =
        load_market_with_underlying(app_state, market_id, "update_market")
            .await?
    else {
        return Ok(false);
    };

    if market.accrual_timestamp >= block_timestamp {
        return Ok(false);
    }

    let chain = &app_state.chain;

    let price = match &protocol.price_oracle {
        Some(oracle) => {
            chain.underlying_price(oracle, market_id, block_number).await
        },
        None => CallResult::Reverted,
    };

    match price {
        CallResult::Value(raw) => {
            let price = oracle_price_to_decimal(&raw, underlying.decimals);
            underlying.last_price_usd = Some(price.clone());
            underlying.last_price_block_number = Some(block_number);
            app_state.store.save(&underlying).await?;
            market.input_token_price_usd = price;
        },
        CallResult::Reverted => {
            warn!(
                "[update_market] Failed to get underlying price of Market {}",
                market_id
            );
        },
    }

    let price = market.input_token_price_usd.clone();

    match chain.total_supply(market_id, block_number).await {
        CallResult::Value(supply) => market.output_token_supply = supply,
        CallResult::Reverted => {
            warn!(
                "[update_market] Failed to get totalSupply of Market {}",
                market_id
            );
        },
    }

    let underlying_supply_usd =
        amount_to_decimal(&market.input_token_balance, underlying.decimals)
            * &price;
    market.total_value_locked_usd = underlying_supply_usd.clone();
    market.total_deposit_balance_usd = underlying_supply_usd;

    match chain.exchange_rate_stored(market_id, block_number).await {
        CallResult::Value(raw) => {
            let rate = exchange_rate_to_decimal(
                &raw,
                underlying.decimals,
                CTOKEN_DECIMALS,
            );
            market.output_token_price_usd = &rate * &price;
            market.exchange_rate = Some(rate);
        },
        CallResult::Reverted => {
            warn!(
                "[update_market] Failed to get exchangeRateStored of Market {}",
                market_id
            );
        },
    }

    let total_borrow_usd =
        match chain.total_borrows(market_id, block_number).await {
            CallResult::Value(raw) => {
                let value =
                    amount_to_decimal(&raw, underlying.decimals) * &price;
                market.total_borrow_balance_usd = value.clone();
                value
            },
            CallResult::Reverted => {
                warn!(
                    "[update_market] Failed to get totalBorrows of Market {}",
                    market_id
                );
                BigDecimal::zero()
            },
        };

    let periods_per_year = app_state.config.periods_per_year;

    match chain.supply_rate_per_period(market_id, block_number).await {
        CallResult::Value(raw) => {
            let apy = rate_per_period_to_apy(&raw, periods_per_year);
            set_interest_rate(app_state, &market, InterestRateSide::Lender, apy)
                .await?;
        },
        CallResult::Reverted => {
            warn!(
                "[update_market] Failed to get supplyRatePerBlock of Market {}",
                market_id
            );
        },
    }

    let borrow_rate =
        match chain.borrow_rate_per_period(market_id, block_number).await {
            CallResult::Value(raw) => {
                let apy = rate_per_period_to_apy(&raw, periods_per_year);
                set_interest_rate(
                    app_state,
                    &market,
                    InterestRateSide::Borrower,
                    apy,
                )
                .await?;
                mantissa_to_decimal(&raw)
            },
            CallResult::Reverted => {
                warn!(
                    "[update_market] Failed to get borrowRatePerBlock of Market {}",
                    market_id
                );
                BigDecimal::zero()
            },
        };

    let deltas = accrue_revenue(
        &total_borrow_usd,
        &borrow_rate,
        block_timestamp - market.accrual_timestamp,
        &market.reserve_factor,
    );

    market.cumulative_total_revenue_usd += &deltas.total_usd;
    market.cumulative_protocol_side_revenue_usd += &deltas.protocol_side_usd;
    market.cumulative_supply_side_revenue_usd += &deltas.supply_side_usd;

    snapshots::add_daily_revenue(
        app_state,
        &market,
        block_number,
        block_timestamp,
        &deltas,
    )
    .await?;

    market.accrual_timestamp = block_timestamp;
    app_state.store.save(&market).await?;

    Ok(true)
}

/// Overwrites one side of the market's rate pair in place.
async fn set_interest_rate(
    app_state: &AppState<State>,
    market: &Market,
    side: InterestRateSide,
    rate: BigDecimal,
) -> Result<(), Error> {
    if market.rates.len() < 2 {
        warn!(
            "[set_interest_rate] Market has less than 2 rates: {}",
            market.id
        );
        return Ok(());
    }

    let rate_id = match side {
        InterestRateSide::Lender => &market.rates[0],
        InterestRateSide::Borrower => &market.rates[1],
    };

    let Some(mut interest_rate) =
        app_state.store.load::<Interest_Rate>(rate_id).await?
    else {
        warn!("[set_interest_rate] {} interest rate not found: {}", side, rate_id);
        return Ok(());
    };

    interest_rate.rate = rate;
    app_state.store.save(&interest_rate).await
}
