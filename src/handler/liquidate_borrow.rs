use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        buckets::event_id,
        enums::EventType,
        math::{amount_to_decimal, CTOKEN_DECIMALS},
    },
    model::Liquidate,
    types::{EventMeta, LiquidateBorrow_Type},
};

use super::{
    lookup::{load_market, load_market_with_underlying},
    protocol::get_or_create_protocol,
    snapshots::update_market_snapshots,
    usage::snapshot_usage,
};

/// The repaid market is the emitter; the seized collateral is denominated
/// in the collateral market's share token.
pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: LiquidateBorrow_Type,
) -> Result<(), Error> {
    let repay_market_id = &meta.address;
    let id = event_id(&meta.transaction_hash, meta.log_index);

    if app_state.store.exists::<Liquidate>(&id).await? {
        info!("[handle_liquidate_borrow] Liquidate {} already recorded", id);
        return Ok(());
    }

    let Some((repay_market, repay_token)) = load_market_with_underlying(
        app_state,
        repay_market_id,
        "handle_liquidate_borrow",
    )
    .await?
    else {
        return Ok(());
    };

    let Some(mut collateral_market) = load_market(
        app_state,
        &item.ctoken_collateral,
        "handle_liquidate_borrow",
    )
    .await?
    else {
        return Ok(());
    };

    let mut protocol =
        get_or_create_protocol(app_state, meta.block_number).await?;

    let gain_usd = amount_to_decimal(&item.seize_tokens, CTOKEN_DECIMALS)
        * &collateral_market.output_token_price_usd;
    let loss_usd = amount_to_decimal(&item.repay_amount, repay_token.decimals)
        * &repay_market.input_token_price_usd;

    let liquidate = Liquidate {
        id,
        hash: meta.transaction_hash.to_owned(),
        log_index: meta.log_index,
        protocol: protocol.id.to_owned(),
        to: repay_market_id.to_owned(),
        from: item.liquidator.to_owned(),
        block_number: meta.block_number,
        timestamp: meta.block_timestamp,
        market: repay_market_id.to_owned(),
        asset: collateral_market.output_token.to_owned(),
        amount: item.seize_tokens.clone(),
        amount_usd: gain_usd.clone(),
        profit_usd: &gain_usd - &loss_usd,
    };
    app_state.store.save(&liquidate).await?;

    collateral_market.cumulative_liquidate_usd += &gain_usd;
    app_state.store.save(&collateral_market).await?;

    update_market_snapshots(
        app_state,
        &collateral_market,
        meta.block_number,
        meta.block_timestamp,
        &gain_usd,
        EventType::Liquidate,
    )
    .await?;

    snapshot_usage(
        app_state,
        &mut protocol,
        meta.block_number,
        meta.block_timestamp,
        &item.liquidator,
        EventType::Liquidate,
    )
    .await
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::{BigDecimal, Zero};

    use super::*;
    use crate::{
        helpers::{
            buckets::{market_daily_snapshot_id, usage_daily_snapshot_id},
            math::SECONDS_PER_DAY,
        },
        model::{Market, Market_Daily_Snapshot, Usage_Metrics_Daily_Snapshot},
        test_support::{app_state, list_market, meta, set_prices, MockChain},
    };

    const DAY: i64 = SECONDS_PER_DAY * 19_000;

    /// Repays 100 units of a 1 USD token and seizes 100 shares worth
    /// 1.1 USD each.
    fn liquidation() -> LiquidateBorrow_Type {
        LiquidateBorrow_Type {
            liquidator: String::from("0xliquidator"),
            borrower: String::from("0xbob"),
            repay_amount: BigDecimal::from(100_000_000),
            ctoken_collateral: String::from("0xb"),
            seize_tokens: BigDecimal::from(10_000_000_000u64),
        }
    }

    #[tokio::test]
    async fn test_liquidation_profit() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());
        list_market(&app_state, &chain, "0xa", "0xua", 6, DAY).await;
        list_market(&app_state, &chain, "0xb", "0xub", 18, DAY).await;
        set_prices(&app_state, "0xa", "1", "0.02").await;
        set_prices(&app_state, "0xb", "55", "1.1").await;

        let event = meta("0xa", 9, DAY + 600);
        parse_and_insert(&app_state, &event, liquidation())
            .await
            .unwrap();

        let liquidate = app_state
            .store
            .load::<Liquidate>(&event_id(&event.transaction_hash, 0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(liquidate.to, "0xa");
        assert_eq!(liquidate.from, "0xliquidator");
        assert_eq!(liquidate.market, "0xa");
        assert_eq!(liquidate.asset, "0xb");
        assert_eq!(liquidate.amount, BigDecimal::from(10_000_000_000u64));
        assert_eq!(liquidate.amount_usd, BigDecimal::from(110));
        assert_eq!(liquidate.profit_usd, BigDecimal::from(10));

        let collateral =
            app_state.store.load::<Market>("0xb").await.unwrap().unwrap();
        assert_eq!(collateral.cumulative_liquidate_usd, BigDecimal::from(110));

        let repaid =
            app_state.store.load::<Market>("0xa").await.unwrap().unwrap();
        assert!(repaid.cumulative_liquidate_usd.is_zero());

        let snapshot = app_state
            .store
            .load::<Market_Daily_Snapshot>(&market_daily_snapshot_id(
                "0xb", DAY,
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.flows.liquidate_usd, BigDecimal::from(110));
        assert!(app_state
            .store
            .load::<Market_Daily_Snapshot>(&market_daily_snapshot_id(
                "0xa", DAY,
            ))
            .await
            .unwrap()
            .is_none());

        let usage = app_state
            .store
            .load::<Usage_Metrics_Daily_Snapshot>(&usage_daily_snapshot_id(
                DAY,
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(usage.counters.liquidate_count, 1);
        assert_eq!(usage.counters.active_users, 1);
    }

    #[tokio::test]
    async fn test_liquidation_at_a_loss() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());
        list_market(&app_state, &chain, "0xa", "0xua", 6, DAY).await;
        list_market(&app_state, &chain, "0xb", "0xub", 18, DAY).await;
        set_prices(&app_state, "0xa", "1.2", "0").await;
        set_prices(&app_state, "0xb", "0", "1.1").await;

        let event = meta("0xa", 9, DAY + 600);
        parse_and_insert(&app_state, &event, liquidation())
            .await
            .unwrap();

        let liquidate = app_state
            .store
            .load::<Liquidate>(&event_id(&event.transaction_hash, 0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            liquidate.profit_usd,
            BigDecimal::from_str("-10").unwrap()
        );
    }

    #[tokio::test]
    async fn test_liquidation_unknown_collateral() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());
        list_market(&app_state, &chain, "0xa", "0xua", 6, DAY).await;

        let event = meta("0xa", 9, DAY + 600);
        parse_and_insert(&app_state, &event, liquidation())
            .await
            .unwrap();

        assert!(!app_state
            .store
            .exists::<Liquidate>(&event_id(&event.transaction_hash, 0))
            .await
            .unwrap());
        assert!(app_state
            .store
            .load::<Usage_Metrics_Daily_Snapshot>(&usage_daily_snapshot_id(
                DAY,
            ))
            .await
            .unwrap()
            .is_none());
    }
}
