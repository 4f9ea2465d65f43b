use serde::{Deserialize, Serialize};

use crate::{dao::Entity, helpers::enums::EventType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage_Counters {
    pub active_users: i64,
    pub cumulative_unique_users: i64,
    pub transaction_count: i64,
    pub deposit_count: i64,
    pub withdraw_count: i64,
    pub borrow_count: i64,
    pub repay_count: i64,
    pub liquidate_count: i64,
}

impl Usage_Counters {
    pub fn record(&mut self, event_type: EventType) {
        self.transaction_count += 1;

        match event_type {
            EventType::Deposit => self.deposit_count += 1,
            EventType::Withdraw => self.withdraw_count += 1,
            EventType::Borrow => self.borrow_count += 1,
            EventType::Repay => self.repay_count += 1,
            EventType::Liquidate => self.liquidate_count += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage_Metrics_Daily_Snapshot {
    pub id: String,
    pub protocol: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub counters: Usage_Counters,
}

impl Entity for Usage_Metrics_Daily_Snapshot {
    const KIND: &'static str = "UsageMetricsDailySnapshot";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage_Metrics_Hourly_Snapshot {
    pub id: String,
    pub protocol: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub counters: Usage_Counters,
}

impl Entity for Usage_Metrics_Hourly_Snapshot {
    const KIND: &'static str = "UsageMetricsHourlySnapshot";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Existence marks a lifetime-unique user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
}

impl Entity for Account {
    const KIND: &'static str = "Account";

    fn id(&self) -> &str {
        &self.id
    }
}

/// `{account}-{bucket}` presence marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Active_Account {
    pub id: String,
}

impl Entity for Active_Account {
    const KIND: &'static str = "ActiveAccount";

    fn id(&self) -> &str {
        &self.id
    }
}
