use bigdecimal::BigDecimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MarketListed_Type {
    #[serde(
        alias = "cToken",
        deserialize_with = "super::address::lowercase"
    )]
    pub ctoken: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPriceOracle_Type {
    #[serde(
        alias = "oldPriceOracle",
        deserialize_with = "super::address::lowercase"
    )]
    pub old_price_oracle: String,
    #[serde(
        alias = "newPriceOracle",
        deserialize_with = "super::address::lowercase"
    )]
    pub new_price_oracle: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCollateralFactor_Type {
    #[serde(
        alias = "cToken",
        deserialize_with = "super::address::lowercase"
    )]
    pub ctoken: String,
    #[serde(alias = "oldCollateralFactorMantissa")]
    pub old_collateral_factor_mantissa: BigDecimal,
    #[serde(alias = "newCollateralFactorMantissa")]
    pub new_collateral_factor_mantissa: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct NewLiquidationIncentive_Type {
    #[serde(alias = "oldLiquidationIncentiveMantissa")]
    pub old_liquidation_incentive_mantissa: BigDecimal,
    #[serde(alias = "newLiquidationIncentiveMantissa")]
    pub new_liquidation_incentive_mantissa: BigDecimal,
}
