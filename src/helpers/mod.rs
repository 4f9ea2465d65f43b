use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::{
        accrue_interest, borrow, liquidate_borrow, market_listed, mint,
        new_collateral_factor, new_liquidation_incentive, new_price_oracle,
        new_reserve_factor, redeem, repay_borrow,
    },
    types::{Event_Log, Protocol_Event},
};

pub mod buckets;
pub mod enums;
pub mod math;

pub async fn parse_event(
    app_state: &AppState<State>,
    log: Event_Log,
) -> Result<(), Error> {
    let meta = &log.meta;

    match log.event {
        Protocol_Event::MarketListed(item) => {
            market_listed::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::NewPriceOracle(item) => {
            new_price_oracle::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::NewCollateralFactor(item) => {
            new_collateral_factor::parse_and_insert(app_state, meta, item)
                .await?;
        },
        Protocol_Event::NewLiquidationIncentive(item) => {
            new_liquidation_incentive::parse_and_insert(app_state, meta, item)
                .await?;
        },
        Protocol_Event::NewReserveFactor(item) => {
            new_reserve_factor::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::Mint(item) => {
            mint::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::Redeem(item) => {
            redeem::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::Borrow(item) => {
            borrow::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::RepayBorrow(item) => {
            repay_borrow::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::LiquidateBorrow(item) => {
            liquidate_borrow::parse_and_insert(app_state, meta, item).await?;
        },
        Protocol_Event::AccrueInterest(item) => {
            accrue_interest::parse_and_insert(app_state, meta, item).await?;
        },
    };

    Ok(())
}
