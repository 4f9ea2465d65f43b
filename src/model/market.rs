use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::dao::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub name: String,
    pub protocol: String,
    pub input_token: String,
    pub output_token: String,
    /// `[lender, borrower]` interest rate ids.
    pub rates: Vec<String>,
    pub is_active: bool,
    pub can_use_as_collateral: bool,
    pub can_borrow_from: bool,
    pub maximum_ltv: BigDecimal,
    pub liquidation_threshold: BigDecimal,
    pub liquidation_penalty: BigDecimal,
    /// Fraction in `[0, 1]`.
    pub reserve_factor: BigDecimal,
    pub created_timestamp: i64,
    pub created_block_number: i64,
    /// Raw underlying units.
    pub input_token_balance: BigDecimal,
    /// Raw share units.
    pub output_token_supply: BigDecimal,
    pub input_token_price_usd: BigDecimal,
    pub output_token_price_usd: BigDecimal,
    pub exchange_rate: Option<BigDecimal>,
    pub total_value_locked_usd: BigDecimal,
    pub total_deposit_balance_usd: BigDecimal,
    pub total_borrow_balance_usd: BigDecimal,
    pub cumulative_deposit_usd: BigDecimal,
    pub cumulative_borrow_usd: BigDecimal,
    pub cumulative_liquidate_usd: BigDecimal,
    pub cumulative_total_revenue_usd: BigDecimal,
    pub cumulative_protocol_side_revenue_usd: BigDecimal,
    pub cumulative_supply_side_revenue_usd: BigDecimal,
    pub accrual_timestamp: i64,
}

impl Entity for Market {
    const KIND: &'static str = "Market";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The live market fields copied into every market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market_Totals {
    pub total_value_locked_usd: BigDecimal,
    pub total_deposit_balance_usd: BigDecimal,
    pub total_borrow_balance_usd: BigDecimal,
    pub cumulative_deposit_usd: BigDecimal,
    pub cumulative_borrow_usd: BigDecimal,
    pub cumulative_liquidate_usd: BigDecimal,
    pub input_token_balance: BigDecimal,
    pub input_token_price_usd: BigDecimal,
    pub output_token_supply: BigDecimal,
    pub output_token_price_usd: BigDecimal,
    pub exchange_rate: Option<BigDecimal>,
    pub rates: Vec<String>,
}

impl From<&Market> for Market_Totals {
    fn from(market: &Market) -> Self {
        Self {
            total_value_locked_usd: market.total_value_locked_usd.clone(),
            total_deposit_balance_usd: market.total_deposit_balance_usd.clone(),
            total_borrow_balance_usd: market.total_borrow_balance_usd.clone(),
            cumulative_deposit_usd: market.cumulative_deposit_usd.clone(),
            cumulative_borrow_usd: market.cumulative_borrow_usd.clone(),
            cumulative_liquidate_usd: market.cumulative_liquidate_usd.clone(),
            input_token_balance: market.input_token_balance.clone(),
            input_token_price_usd: market.input_token_price_usd.clone(),
            output_token_supply: market.output_token_supply.clone(),
            output_token_price_usd: market.output_token_price_usd.clone(),
            exchange_rate: market.exchange_rate.clone(),
            rates: market.rates.clone(),
        }
    }
}
