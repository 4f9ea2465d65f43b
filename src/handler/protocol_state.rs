use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{Lending_Protocol, Protocol_Totals},
};

use super::lookup::load_markets;

/// Re-sums every stored market into the protocol totals and saves the
/// protocol.
pub async fn update_protocol(
    app_state: &AppState<State>,
    protocol: &mut Lending_Protocol,
) -> Result<(), Error> {
    let markets =
        load_markets(app_state, &protocol.market_ids, "update_protocol")
            .await?;

    protocol.totals = markets
        .iter()
        .fold(Protocol_Totals::default(), |totals, market| totals.add(market));

    app_state.store.save(protocol).await
}

#[cfg(test)]
mod tests {
    use bigdecimal::{BigDecimal, Zero};

    use super::*;
    use crate::{
        handler::protocol::get_or_create_protocol,
        model::Market,
        test_support::{app_state, list_market, MockChain},
    };

    async fn set_market_totals(
        app_state: &AppState<State>,
        market_id: &str,
        tvl: i64,
        revenue: i64,
    ) {
        let mut market = app_state
            .store
            .load::<Market>(market_id)
            .await
            .unwrap()
            .unwrap();
        market.total_value_locked_usd = BigDecimal::from(tvl);
        market.total_deposit_balance_usd = BigDecimal::from(tvl);
        market.cumulative_total_revenue_usd = BigDecimal::from(revenue);
        app_state.store.save(&market).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_protocol_sums_existing_markets() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());

        list_market(&app_state, &chain, "0xa", "0xua", 6, 100).await;
        list_market(&app_state, &chain, "0xb", "0xub", 18, 100).await;
        set_market_totals(&app_state, "0xa", 150, 7).await;
        set_market_totals(&app_state, "0xb", 250, 3).await;

        let mut protocol = get_or_create_protocol(&app_state, 1).await.unwrap();
        protocol.market_ids.push(String::from("0xnot-stored"));

        update_protocol(&app_state, &mut protocol).await.unwrap();

        assert_eq!(protocol.totals.total_value_locked_usd, BigDecimal::from(400));
        assert_eq!(
            protocol.totals.total_deposit_balance_usd,
            BigDecimal::from(400)
        );
        assert_eq!(
            protocol.totals.cumulative_total_revenue_usd,
            BigDecimal::from(10)
        );
        assert!(protocol.totals.total_borrow_balance_usd.is_zero());

        let stored = get_or_create_protocol(&app_state, 1).await.unwrap();
        assert_eq!(stored.totals, protocol.totals);
    }

    #[tokio::test]
    async fn test_update_protocol_recomputes_from_scratch() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());

        list_market(&app_state, &chain, "0xa", "0xua", 6, 100).await;
        set_market_totals(&app_state, "0xa", 150, 0).await;

        let mut protocol = get_or_create_protocol(&app_state, 1).await.unwrap();
        update_protocol(&app_state, &mut protocol).await.unwrap();
        update_protocol(&app_state, &mut protocol).await.unwrap();

        assert_eq!(protocol.totals.total_value_locked_usd, BigDecimal::from(150));

        set_market_totals(&app_state, "0xa", 90, 0).await;
        update_protocol(&app_state, &mut protocol).await.unwrap();

        assert_eq!(protocol.totals.total_value_locked_usd, BigDecimal::from(90));
    }
}
