use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::{dao::Entity, helpers::enums::EventType};

use super::{Market_Totals, Protocol_Totals};

/// Flows accumulated within one day. Revenue fields are written by the
/// accrual path, the others by user actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daily_Flows {
    pub deposit_usd: BigDecimal,
    pub borrow_usd: BigDecimal,
    pub liquidate_usd: BigDecimal,
    pub total_revenue_usd: BigDecimal,
    pub protocol_side_revenue_usd: BigDecimal,
    pub supply_side_revenue_usd: BigDecimal,
}

impl Default for Daily_Flows {
    fn default() -> Self {
        Self {
            deposit_usd: BigDecimal::zero(),
            borrow_usd: BigDecimal::zero(),
            liquidate_usd: BigDecimal::zero(),
            total_revenue_usd: BigDecimal::zero(),
            protocol_side_revenue_usd: BigDecimal::zero(),
            supply_side_revenue_usd: BigDecimal::zero(),
        }
    }
}

impl Daily_Flows {
    pub fn record(&mut self, event_type: EventType, amount_usd: &BigDecimal) {
        match event_type {
            EventType::Deposit => self.deposit_usd += amount_usd,
            EventType::Borrow => self.borrow_usd += amount_usd,
            EventType::Liquidate => self.liquidate_usd += amount_usd,
            EventType::Withdraw | EventType::Repay => {},
        }
    }

    pub fn add(mut self, other: &Daily_Flows) -> Self {
        self.deposit_usd += &other.deposit_usd;
        self.borrow_usd += &other.borrow_usd;
        self.liquidate_usd += &other.liquidate_usd;
        self.total_revenue_usd += &other.total_revenue_usd;
        self.protocol_side_revenue_usd += &other.protocol_side_revenue_usd;
        self.supply_side_revenue_usd += &other.supply_side_revenue_usd;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hourly_Flows {
    pub deposit_usd: BigDecimal,
    pub borrow_usd: BigDecimal,
    pub liquidate_usd: BigDecimal,
}

impl Default for Hourly_Flows {
    fn default() -> Self {
        Self {
            deposit_usd: BigDecimal::zero(),
            borrow_usd: BigDecimal::zero(),
            liquidate_usd: BigDecimal::zero(),
        }
    }
}

impl Hourly_Flows {
    pub fn record(&mut self, event_type: EventType, amount_usd: &BigDecimal) {
        match event_type {
            EventType::Deposit => self.deposit_usd += amount_usd,
            EventType::Borrow => self.borrow_usd += amount_usd,
            EventType::Liquidate => self.liquidate_usd += amount_usd,
            EventType::Withdraw | EventType::Repay => {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market_Daily_Snapshot {
    pub id: String,
    pub protocol: String,
    pub market: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub totals: Market_Totals,
    pub flows: Daily_Flows,
}

impl Entity for Market_Daily_Snapshot {
    const KIND: &'static str = "MarketDailySnapshot";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market_Hourly_Snapshot {
    pub id: String,
    pub protocol: String,
    pub market: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub totals: Market_Totals,
    pub flows: Hourly_Flows,
}

impl Entity for Market_Hourly_Snapshot {
    const KIND: &'static str = "MarketHourlySnapshot";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Financials_Daily_Snapshot {
    pub id: String,
    pub protocol: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub totals: Protocol_Totals,
    pub flows: Daily_Flows,
}

impl Entity for Financials_Daily_Snapshot {
    const KIND: &'static str = "FinancialsDailySnapshot";

    fn id(&self) -> &str {
        &self.id
    }
}
