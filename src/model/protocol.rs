use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    dao::Entity,
    helpers::enums::{LendingType, Network, ProtocolType, RiskType},
};

use super::Market;

/// Protocol-wide USD totals. Recomputed from scratch on every aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol_Totals {
    pub total_value_locked_usd: BigDecimal,
    pub total_deposit_balance_usd: BigDecimal,
    pub total_borrow_balance_usd: BigDecimal,
    pub cumulative_deposit_usd: BigDecimal,
    pub cumulative_borrow_usd: BigDecimal,
    pub cumulative_liquidate_usd: BigDecimal,
    pub cumulative_total_revenue_usd: BigDecimal,
    pub cumulative_protocol_side_revenue_usd: BigDecimal,
    pub cumulative_supply_side_revenue_usd: BigDecimal,
}

impl Default for Protocol_Totals {
    fn default() -> Self {
        Self {
            total_value_locked_usd: BigDecimal::zero(),
            total_deposit_balance_usd: BigDecimal::zero(),
            total_borrow_balance_usd: BigDecimal::zero(),
            cumulative_deposit_usd: BigDecimal::zero(),
            cumulative_borrow_usd: BigDecimal::zero(),
            cumulative_liquidate_usd: BigDecimal::zero(),
            cumulative_total_revenue_usd: BigDecimal::zero(),
            cumulative_protocol_side_revenue_usd: BigDecimal::zero(),
            cumulative_supply_side_revenue_usd: BigDecimal::zero(),
        }
    }
}

impl Protocol_Totals {
    pub fn add(mut self, market: &Market) -> Self {
        self.total_value_locked_usd += &market.total_value_locked_usd;
        self.total_deposit_balance_usd += &market.total_deposit_balance_usd;
        self.total_borrow_balance_usd += &market.total_borrow_balance_usd;
        self.cumulative_deposit_usd += &market.cumulative_deposit_usd;
        self.cumulative_borrow_usd += &market.cumulative_borrow_usd;
        self.cumulative_liquidate_usd += &market.cumulative_liquidate_usd;
        self.cumulative_total_revenue_usd +=
            &market.cumulative_total_revenue_usd;
        self.cumulative_protocol_side_revenue_usd +=
            &market.cumulative_protocol_side_revenue_usd;
        self.cumulative_supply_side_revenue_usd +=
            &market.cumulative_supply_side_revenue_usd;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lending_Protocol {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub schema_version: String,
    pub subgraph_version: String,
    pub methodology_version: String,
    pub network: Network,
    pub r#type: ProtocolType,
    pub lending_type: LendingType,
    pub risk_type: RiskType,
    pub price_oracle: Option<String>,
    /// Percent, e.g. `108` for a 1.08 mantissa.
    pub liquidation_incentive: BigDecimal,
    pub market_ids: Vec<String>,
    pub totals: Protocol_Totals,
    pub cumulative_unique_users: i64,
}

impl Entity for Lending_Protocol {
    const KIND: &'static str = "LendingProtocol";

    fn id(&self) -> &str {
        &self.id
    }
}
