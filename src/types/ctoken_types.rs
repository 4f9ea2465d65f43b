use bigdecimal::BigDecimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Mint_Type {
    #[serde(deserialize_with = "super::address::lowercase")]
    pub minter: String,
    #[serde(alias = "mintAmount")]
    pub mint_amount: BigDecimal,
    #[serde(alias = "mintTokens")]
    pub mint_tokens: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct Redeem_Type {
    #[serde(deserialize_with = "super::address::lowercase")]
    pub redeemer: String,
    #[serde(alias = "redeemAmount")]
    pub redeem_amount: BigDecimal,
    #[serde(alias = "redeemTokens")]
    pub redeem_tokens: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct Borrow_Type {
    #[serde(deserialize_with = "super::address::lowercase")]
    pub borrower: String,
    #[serde(alias = "borrowAmount")]
    pub borrow_amount: BigDecimal,
    #[serde(alias = "accountBorrows")]
    pub account_borrows: BigDecimal,
    #[serde(alias = "totalBorrows")]
    pub total_borrows: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct RepayBorrow_Type {
    #[serde(deserialize_with = "super::address::lowercase")]
    pub payer: String,
    #[serde(deserialize_with = "super::address::lowercase")]
    pub borrower: String,
    #[serde(alias = "repayAmount")]
    pub repay_amount: BigDecimal,
    #[serde(alias = "accountBorrows")]
    pub account_borrows: BigDecimal,
    #[serde(alias = "totalBorrows")]
    pub total_borrows: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct LiquidateBorrow_Type {
    #[serde(deserialize_with = "super::address::lowercase")]
    pub liquidator: String,
    #[serde(deserialize_with = "super::address::lowercase")]
    pub borrower: String,
    #[serde(alias = "repayAmount")]
    pub repay_amount: BigDecimal,
    #[serde(
        alias = "cTokenCollateral",
        deserialize_with = "super::address::lowercase"
    )]
    pub ctoken_collateral: String,
    #[serde(alias = "seizeTokens")]
    pub seize_tokens: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct AccrueInterest_Type {
    #[serde(alias = "cashPrior")]
    pub cash_prior: BigDecimal,
    #[serde(alias = "interestAccumulated")]
    pub interest_accumulated: BigDecimal,
    #[serde(alias = "borrowIndex")]
    pub borrow_index: BigDecimal,
    #[serde(alias = "totalBorrows")]
    pub total_borrows: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct NewReserveFactor_Type {
    #[serde(alias = "oldReserveFactorMantissa")]
    pub old_reserve_factor_mantissa: BigDecimal,
    #[serde(alias = "newReserveFactorMantissa")]
    pub new_reserve_factor_mantissa: BigDecimal,
}
