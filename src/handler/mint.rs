use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{buckets::event_id, enums::EventType, math::amount_to_decimal},
    model::Deposit,
    types::{EventMeta, Mint_Type},
};

use super::{
    lookup::load_market_with_underlying, protocol::get_or_create_protocol,
    snapshots::update_market_snapshots, usage::snapshot_usage,
};

pub async fn parse_and_insert(
    app_state: &AppState<State>,
    meta: &EventMeta,
    item: Mint_Type,
) -> Result<(), Error> {
    let market_id = &meta.address;
    let id = event_id(&meta.transaction_hash, meta.log_index);

    if app_state.store.exists::<Deposit>(&id).await? {
        info!("[handle_mint] Deposit {} already recorded", id);
        return Ok(());
    }

    let Some((mut market, underlying)) =
        load_market_with_underlying(app_state, market_id, "handle_mint").await?
    else {
        return Ok(());
    };

    let mut protocol =
        get_or_create_protocol(app_state, meta.block_number).await?;

    let amount_usd = amount_to_decimal(&item.mint_amount, underlying.decimals)
        * &market.input_token_price_usd;

    let deposit = Deposit {
        id,
        hash: meta.transaction_hash.to_owned(),
        log_index: meta.log_index,
        protocol: protocol.id.to_owned(),
        to: market_id.to_owned(),
        from: item.minter.to_owned(),
        block_number: meta.block_number,
        timestamp: meta.block_timestamp,
        market: market_id.to_owned(),
        asset: market.input_token.to_owned(),
        amount: item.mint_amount.clone(),
        amount_usd: amount_usd.clone(),
    };
    app_state.store.save(&deposit).await?;

    market.input_token_balance += &item.mint_amount;
    market.cumulative_deposit_usd += &amount_usd;
    app_state.store.save(&market).await?;

    update_market_snapshots(
        app_state,
        &market,
        meta.block_number,
        meta.block_timestamp,
        &amount_usd,
        EventType::Deposit,
    )
    .await?;

    snapshot_usage(
        app_state,
        &mut protocol,
        meta.block_number,
        meta.block_timestamp,
        &item.minter,
        EventType::Deposit,
    )
    .await
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;
    use crate::{
        handler::protocol::load_protocol,
        helpers::{
            buckets::{market_daily_snapshot_id, usage_daily_snapshot_id},
            math::SECONDS_PER_DAY,
        },
        model::{Market, Market_Daily_Snapshot, Usage_Metrics_Daily_Snapshot},
        test_support::{app_state, list_market, meta, set_prices, MockChain},
    };

    const DAY: i64 = SECONDS_PER_DAY * 19_000;

    fn mint(amount: i64) -> Mint_Type {
        Mint_Type {
            minter: String::from("0xalice"),
            mint_amount: BigDecimal::from(amount),
            mint_tokens: BigDecimal::from(amount * 50),
        }
    }

    #[tokio::test]
    async fn test_mint_records_deposit() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());
        list_market(&app_state, &chain, "0xa", "0xua", 6, DAY).await;
        set_prices(&app_state, "0xa", "2", "0").await;

        let event = meta("0xa", 5, DAY + 60);
        parse_and_insert(&app_state, &event, mint(5_000_000))
            .await
            .unwrap();

        let deposit = app_state
            .store
            .load::<Deposit>(&event_id(&event.transaction_hash, 0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(deposit.from, "0xalice");
        assert_eq!(deposit.to, "0xa");
        assert_eq!(deposit.asset, "0xua");
        assert_eq!(deposit.amount, BigDecimal::from(5_000_000));
        assert_eq!(deposit.amount_usd, BigDecimal::from(10));

        let market =
            app_state.store.load::<Market>("0xa").await.unwrap().unwrap();
        assert_eq!(market.input_token_balance, BigDecimal::from(5_000_000));
        assert_eq!(market.cumulative_deposit_usd, BigDecimal::from(10));

        let snapshot = app_state
            .store
            .load::<Market_Daily_Snapshot>(&market_daily_snapshot_id(
                "0xa", DAY,
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.flows.deposit_usd, BigDecimal::from(10));
        assert_eq!(
            snapshot.totals.input_token_balance,
            BigDecimal::from(5_000_000)
        );

        let usage = app_state
            .store
            .load::<Usage_Metrics_Daily_Snapshot>(&usage_daily_snapshot_id(
                DAY,
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(usage.counters.deposit_count, 1);
        assert_eq!(usage.counters.cumulative_unique_users, 1);

        let protocol = load_protocol(&app_state, "t").await.unwrap().unwrap();
        assert_eq!(protocol.cumulative_unique_users, 1);
    }

    #[tokio::test]
    async fn test_mint_replay_is_ignored() {
        let chain = MockChain::default();
        let app_state = app_state(chain.clone());
        list_market(&app_state, &chain, "0xa", "0xua", 6, DAY).await;
        set_prices(&app_state, "0xa", "1", "0").await;

        let event = meta("0xa", 5, DAY + 60);
        for _ in 0..2 {
            parse_and_insert(&app_state, &event, mint(1_000_000))
                .await
                .unwrap();
        }

        let market =
            app_state.store.load::<Market>("0xa").await.unwrap().unwrap();
        assert_eq!(market.input_token_balance, BigDecimal::from(1_000_000));
        assert_eq!(market.cumulative_deposit_usd, BigDecimal::from(1));
    }

    #[tokio::test]
    async fn test_mint_unknown_market() {
        let app_state = app_state(MockChain::default());
        let event = meta("0xmissing", 5, DAY);

        parse_and_insert(&app_state, &event, mint(1_000_000))
            .await
            .unwrap();

        assert!(!app_state
            .store
            .exists::<Deposit>(&event_id(&event.transaction_hash, 0))
            .await
            .unwrap());
        assert!(app_state
            .store
            .load::<Market>("0xmissing")
            .await
            .unwrap()
            .is_none());
    }
}
