use serde::Deserialize;

use super::{
    AccrueInterest_Type, Borrow_Type, EventMeta, LiquidateBorrow_Type,
    MarketListed_Type, Mint_Type, NewCollateralFactor_Type,
    NewLiquidationIncentive_Type, NewPriceOracle_Type, NewReserveFactor_Type,
    Redeem_Type, RepayBorrow_Type,
};

/// One decoded log as delivered by the host.
#[derive(Debug, Deserialize)]
pub struct Event_Log {
    pub meta: EventMeta,
    pub event: Protocol_Event,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Protocol_Event {
    MarketListed(MarketListed_Type),
    NewPriceOracle(NewPriceOracle_Type),
    NewCollateralFactor(NewCollateralFactor_Type),
    NewLiquidationIncentive(NewLiquidationIncentive_Type),
    NewReserveFactor(NewReserveFactor_Type),
    Mint(Mint_Type),
    Redeem(Redeem_Type),
    Borrow(Borrow_Type),
    RepayBorrow(RepayBorrow_Type),
    LiquidateBorrow(LiquidateBorrow_Type),
    AccrueInterest(AccrueInterest_Type),
}
