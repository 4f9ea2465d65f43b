use std::fmt::Debug;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::types::CallResult;

/// Point-in-time reads against the source chain. Every call is
/// best-effort: transport failures and reverts both surface as
/// [`CallResult::Reverted`].
#[async_trait]
pub trait ChainReader: Debug + Send + Sync {
    /// Underlying asset of a market.
    async fn underlying(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<String>;

    async fn name(&self, token: &str, block_number: i64) -> CallResult<String>;

    async fn symbol(&self, token: &str, block_number: i64)
        -> CallResult<String>;

    async fn decimals(&self, token: &str, block_number: i64) -> CallResult<u32>;

    /// Raw share supply.
    async fn total_supply(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    async fn exchange_rate_stored(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    /// Raw underlying units.
    async fn total_borrows(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    async fn supply_rate_per_period(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    async fn borrow_rate_per_period(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    async fn reserve_factor_mantissa(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    /// Oracle answer scaled by `10^(36 - underlying decimals)`.
    async fn underlying_price(
        &self,
        oracle: &str,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;

    async fn liquidation_incentive_mantissa(
        &self,
        controller: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal>;
}
