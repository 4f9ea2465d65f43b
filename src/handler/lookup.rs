use tracing::warn;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{Market, Token},
};

pub async fn load_market(
    app_state: &AppState<State>,
    market_id: &str,
    caller: &str,
) -> Result<Option<Market>, Error> {
    let market = app_state.store.load::<Market>(market_id).await?;

    if market.is_none() {
        warn!("[{}] Market not found: {}", caller, market_id);
    }

    Ok(market)
}

pub async fn load_token(
    app_state: &AppState<State>,
    token_id: &str,
    caller: &str,
) -> Result<Option<Token>, Error> {
    let token = app_state.store.load::<Token>(token_id).await?;

    if token.is_none() {
        warn!("[{}] Token not found: {}", caller, token_id);
    }

    Ok(token)
}

/// A market together with its underlying token; `None` when either is
/// missing.
pub async fn load_market_with_underlying(
    app_state: &AppState<State>,
    market_id: &str,
    caller: &str,
) -> Result<Option<(Market, Token)>, Error> {
    let Some(market) = load_market(app_state, market_id, caller).await? else {
        return Ok(None);
    };

    let Some(underlying) =
        load_token(app_state, &market.input_token, caller).await?
    else {
        return Ok(None);
    };

    Ok(Some((market, underlying)))
}

/// Every market listed under the protocol that exists in the store. Missing
/// ids are logged and skipped.
pub async fn load_markets(
    app_state: &AppState<State>,
    market_ids: &[String],
    caller: &str,
) -> Result<Vec<Market>, Error> {
    let mut markets = Vec::with_capacity(market_ids.len());

    for market_id in market_ids {
        if let Some(market) = load_market(app_state, market_id, caller).await? {
            markets.push(market);
        }
    }

    Ok(markets)
}
