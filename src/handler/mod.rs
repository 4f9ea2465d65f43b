pub mod accrue_interest;
pub mod borrow;
pub mod liquidate_borrow;
pub mod lookup;
pub mod market_listed;
pub mod market_state;
pub mod mint;
pub mod new_collateral_factor;
pub mod new_liquidation_incentive;
pub mod new_price_oracle;
pub mod new_reserve_factor;
pub mod protocol;
pub mod protocol_state;
pub mod redeem;
pub mod repay_borrow;
pub mod snapshots;
pub mod usage;
