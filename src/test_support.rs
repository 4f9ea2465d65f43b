use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::{
    configuration::{AppState, Config, State},
    dao::{MemoryStore, Store},
    handler::market_listed,
    helpers::{
        enums::Network,
        math::{exponent_to_big_decimal, SECONDS_PER_YEAR},
    },
    model::Market,
    provider::ChainReader,
    types::{CallResult, EventMeta, MarketListed_Type},
};

pub const ORACLE: &str = "0xoracle";

/// Market reads served by [`MockChain`]. `None` answers as a revert.
#[derive(Debug, Clone, Default)]
pub struct MockMarket {
    pub underlying: Option<String>,
    pub total_supply: Option<BigDecimal>,
    pub exchange_rate: Option<BigDecimal>,
    pub total_borrows: Option<BigDecimal>,
    pub supply_rate: Option<BigDecimal>,
    pub borrow_rate: Option<BigDecimal>,
    pub reserve_factor: Option<BigDecimal>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Clone, Default)]
pub struct MockToken {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u32>,
}

impl MockToken {
    pub fn new(name: &str, symbol: &str, decimals: u32) -> MockToken {
        MockToken {
            name: Some(name.to_owned()),
            symbol: Some(symbol.to_owned()),
            decimals: Some(decimals),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    markets: HashMap<String, MockMarket>,
    tokens: HashMap<String, MockToken>,
    liquidation_incentive: Option<BigDecimal>,
}

/// In-memory chain whose answers tests set up front and may change
/// between events. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    state: Arc<Mutex<MockState>>,
}

impl MockChain {
    pub fn set_market(&self, market: &str, value: MockMarket) {
        self.state
            .lock()
            .unwrap()
            .markets
            .insert(market.to_owned(), value);
    }

    pub fn update_market<F: FnOnce(&mut MockMarket)>(&self, market: &str, f: F) {
        let mut state = self.state.lock().unwrap();
        f(state.markets.entry(market.to_owned()).or_default());
    }

    pub fn set_token(&self, token: &str, value: MockToken) {
        self.state
            .lock()
            .unwrap()
            .tokens
            .insert(token.to_owned(), value);
    }

    pub fn set_liquidation_incentive(&self, value: BigDecimal) {
        self.state.lock().unwrap().liquidation_incentive = Some(value);
    }

    fn market<T, F: FnOnce(&MockMarket) -> Option<T>>(
        &self,
        market: &str,
        f: F,
    ) -> CallResult<T> {
        let state = self.state.lock().unwrap();
        state.markets.get(market).and_then(f).into()
    }

    fn token<T, F: FnOnce(&MockToken) -> Option<T>>(
        &self,
        token: &str,
        f: F,
    ) -> CallResult<T> {
        let state = self.state.lock().unwrap();
        state.tokens.get(token).and_then(f).into()
    }
}

#[async_trait]
impl ChainReader for MockChain {
    async fn underlying(&self, market: &str, _: i64) -> CallResult<String> {
        self.market(market, |m| m.underlying.clone())
    }

    async fn name(&self, token: &str, _: i64) -> CallResult<String> {
        self.token(token, |t| t.name.clone())
    }

    async fn symbol(&self, token: &str, _: i64) -> CallResult<String> {
        self.token(token, |t| t.symbol.clone())
    }

    async fn decimals(&self, token: &str, _: i64) -> CallResult<u32> {
        self.token(token, |t| t.decimals)
    }

    async fn total_supply(&self, market: &str, _: i64) -> CallResult<BigDecimal> {
        self.market(market, |m| m.total_supply.clone())
    }

    async fn exchange_rate_stored(
        &self,
        market: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        self.market(market, |m| m.exchange_rate.clone())
    }

    async fn total_borrows(&self, market: &str, _: i64) -> CallResult<BigDecimal> {
        self.market(market, |m| m.total_borrows.clone())
    }

    async fn supply_rate_per_period(
        &self,
        market: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        self.market(market, |m| m.supply_rate.clone())
    }

    async fn borrow_rate_per_period(
        &self,
        market: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        self.market(market, |m| m.borrow_rate.clone())
    }

    async fn reserve_factor_mantissa(
        &self,
        market: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        self.market(market, |m| m.reserve_factor.clone())
    }

    async fn underlying_price(
        &self,
        oracle: &str,
        market: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        if oracle != ORACLE {
            return CallResult::Reverted;
        }

        self.market(market, |m| m.price.clone())
    }

    async fn liquidation_incentive_mantissa(
        &self,
        _: &str,
        _: i64,
    ) -> CallResult<BigDecimal> {
        self.state
            .lock()
            .unwrap()
            .liquidation_incentive
            .clone()
            .into()
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        max_connections: 1,
        rpc_host: String::from("http://localhost:8545"),
        timeout: 5,
        events_source: String::from("events.jsonl"),
        controller_address: String::from("0xcontroller"),
        native_market_address: String::from("0xceth"),
        native_market_name: String::from("Bastion Ether"),
        native_market_symbol: String::from("cETH"),
        native_token_address: String::from(
            "0x0000000000000000000000000000000000000000",
        ),
        native_token_name: String::from("Ether"),
        native_token_symbol: String::from("ETH"),
        protocol_name: String::from("Bastion Protocol"),
        protocol_slug: String::from("bastion-protocol"),
        schema_version: String::from("1.2.0"),
        subgraph_version: String::from("1.0.0"),
        methodology_version: String::from("1.0.0"),
        network: Network::Aurora,
        periods_per_year: SECONDS_PER_YEAR,
    }
}

pub fn app_state(chain: MockChain) -> AppState<State> {
    let state = State::new(test_config(), Store::new(MemoryStore::new()), chain);
    AppState::new(state)
}

/// Meta of the only log in a block's transaction.
pub fn meta(address: &str, block_number: i64, block_timestamp: i64) -> EventMeta {
    EventMeta {
        transaction_hash: format!("0xtx{}", block_number),
        log_index: 0,
        block_number,
        block_timestamp,
        address: address.to_owned(),
    }
}

/// Raw oracle answer for a whole-dollar price.
pub fn price_mantissa(usd: i64, decimals: u32) -> BigDecimal {
    BigDecimal::from(usd) * exponent_to_big_decimal(36 - decimals)
}

/// Lists `market` over `underlying` through the listing handler, keeping
/// any answers already configured for the market.
pub async fn list_market(
    app_state: &AppState<State>,
    chain: &MockChain,
    market: &str,
    underlying: &str,
    decimals: u32,
    block_timestamp: i64,
) {
    chain.update_market(market, |m| m.underlying = Some(underlying.to_owned()));
    chain.set_token(underlying, MockToken::new(underlying, underlying, decimals));

    market_listed::parse_and_insert(
        app_state,
        &meta("0xcontroller", 1, block_timestamp),
        MarketListed_Type {
            ctoken: market.to_owned(),
        },
    )
    .await
    .unwrap();
}

/// Overwrites the stored input and output token prices of a market.
pub async fn set_prices(
    app_state: &AppState<State>,
    market_id: &str,
    input_price_usd: &str,
    output_price_usd: &str,
) {
    let mut market = app_state
        .store
        .load::<Market>(market_id)
        .await
        .unwrap()
        .unwrap();
    market.input_token_price_usd = BigDecimal::from_str(input_price_usd).unwrap();
    market.output_token_price_usd =
        BigDecimal::from_str(output_price_usd).unwrap();
    app_state.store.save(&market).await.unwrap();
}
