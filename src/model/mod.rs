//! Entities persisted through the store.

mod events;
mod interest_rate;
mod market;
mod protocol;
mod snapshots;
mod stored_entity;
mod table;
mod token;
mod usage;

pub use events::{Borrow, Deposit, Liquidate, Repay, Withdraw};
pub use interest_rate::Interest_Rate;
pub use market::{Market, Market_Totals};
pub use protocol::{Lending_Protocol, Protocol_Totals};
pub use snapshots::{
    Daily_Flows, Financials_Daily_Snapshot, Hourly_Flows,
    Market_Daily_Snapshot, Market_Hourly_Snapshot,
};
pub use stored_entity::Stored_Entity;
pub use table::Table;
pub use token::Token;
pub use usage::{
    Account, Active_Account, Usage_Counters, Usage_Metrics_Daily_Snapshot,
    Usage_Metrics_Hourly_Snapshot,
};
