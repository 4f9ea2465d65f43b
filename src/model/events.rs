use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::dao::Entity;

macro_rules! action_record {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub id: String,
            pub hash: String,
            pub log_index: i64,
            pub protocol: String,
            pub to: String,
            pub from: String,
            pub block_number: i64,
            pub timestamp: i64,
            pub market: String,
            pub asset: String,
            /// Raw units of `asset`.
            pub amount: BigDecimal,
            pub amount_usd: BigDecimal,
        }

        impl Entity for $name {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

action_record!(Deposit, "Deposit");
action_record!(Withdraw, "Withdraw");
action_record!(Borrow, "Borrow");
action_record!(Repay, "Repay");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liquidate {
    pub id: String,
    pub hash: String,
    pub log_index: i64,
    pub protocol: String,
    pub to: String,
    pub from: String,
    pub block_number: i64,
    pub timestamp: i64,
    pub market: String,
    /// Share token of the collateral market.
    pub asset: String,
    /// Seized share tokens, raw units.
    pub amount: BigDecimal,
    pub amount_usd: BigDecimal,
    pub profit_usd: BigDecimal,
}

impl Entity for Liquidate {
    const KIND: &'static str = "Liquidate";

    fn id(&self) -> &str {
        &self.id
    }
}
