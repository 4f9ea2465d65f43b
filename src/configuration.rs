use std::{env, fs, ops::Deref, path::Path, sync::Arc};

use tracing::info;

use crate::{
    dao::Store, error::Error, helpers::enums::Network, provider::ChainReader,
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub store: Store,
    pub chain: Box<dyn ChainReader>,
}

impl State {
    pub fn new<C: ChainReader + 'static>(
        config: Config,
        store: Store,
        chain: C,
    ) -> State {
        info!("Entity store backend: {}", store.backend_type());

        State {
            config,
            store,
            chain: Box::new(chain),
        }
    }

    pub fn is_native_market(&self, market_id: &str) -> bool {
        self.config
            .native_market_address
            .eq_ignore_ascii_case(market_id)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Empty selects the in-memory store.
    pub database_url: String,
    pub max_connections: u32,
    pub rpc_host: String,
    pub timeout: u64,
    pub events_source: String,
    pub controller_address: String,
    pub native_market_address: String,
    pub native_market_name: String,
    pub native_market_symbol: String,
    pub native_token_address: String,
    pub native_token_name: String,
    pub native_token_symbol: String,
    pub protocol_name: String,
    pub protocol_slug: String,
    pub schema_version: String,
    pub subgraph_version: String,
    pub methodology_version: String,
    pub network: Network,
    pub periods_per_year: i64,
}

impl Config {
    pub fn use_database(&self) -> bool {
        !self.database_url.is_empty()
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let database_url = env::var("DATABASE_URL").unwrap_or_default();
    let max_connections = env::var("MAX_CONNECTIONS")?.parse()?;
    let rpc_host = env::var("RPC_HOST")?;
    let timeout = env::var("TIMEOUT")?.parse()?;
    let events_source = env::var("EVENTS_SOURCE")?;
    let controller_address = env::var("CONTROLLER_ADDRESS")?.to_lowercase();
    let native_market_address =
        env::var("NATIVE_MARKET_ADDRESS")?.to_lowercase();
    let native_market_name = env::var("NATIVE_MARKET_NAME")?;
    let native_market_symbol = env::var("NATIVE_MARKET_SYMBOL")?;
    let native_token_address = env::var("NATIVE_TOKEN_ADDRESS")?.to_lowercase();
    let native_token_name = env::var("NATIVE_TOKEN_NAME")?;
    let native_token_symbol = env::var("NATIVE_TOKEN_SYMBOL")?;
    let protocol_name = env::var("PROTOCOL_NAME")?;
    let protocol_slug = env::var("PROTOCOL_SLUG")?;
    let schema_version = env::var("SCHEMA_VERSION")?;
    let subgraph_version = env::var("SUBGRAPH_VERSION")?;
    let methodology_version = env::var("METHODOLOGY_VERSION")?;
    let network = env::var("NETWORK")?.parse()?;
    let periods_per_year: i64 = env::var("PERIODS_PER_YEAR")?.parse()?;

    if periods_per_year <= 0 {
        return Err(Error::ConfigurationError(format!(
            "PERIODS_PER_YEAR must be positive, got {}",
            periods_per_year
        )));
    }

    let config = Config {
        database_url,
        max_connections,
        rpc_host,
        timeout,
        events_source,
        controller_address,
        native_market_address,
        native_market_name,
        native_market_symbol,
        native_token_address,
        native_token_name,
        native_token_symbol,
        protocol_name,
        protocol_slug,
        schema_version,
        subgraph_version,
        methodology_version,
        network,
        periods_per_year,
    };

    Ok(config)
}

/// Loads `etl.conf`, then an optional `.env` whose values take precedence.
pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";
    let etl_config_file: &str = "etl.conf";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);
    let etl_config_path = format!("{}/{}", directory, etl_config_file);

    let etl_config_string = fs::read_to_string(etl_config_path)?;
    parse_config_string(etl_config_string);

    if Path::new(&path).exists() {
        let config_string = fs::read_to_string(path)?;
        parse_config_string(config_string);
    }

    Ok(())
}

fn parse_config_string(config: String) {
    for (key, value) in parse_config_pairs(&config) {
        env::set_var(key, value);
    }
}

/// `KEY=value` lines; blank lines and `#` comments are skipped.
fn parse_config_pairs(config: &str) -> Vec<(&str, &str)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}
