use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{
        buckets::{
            active_account_id, usage_daily_snapshot_id,
            usage_hourly_snapshot_id,
        },
        enums::EventType,
    },
    model::{
        Account, Active_Account, Lending_Protocol, Usage_Counters,
        Usage_Metrics_Daily_Snapshot, Usage_Metrics_Hourly_Snapshot,
    },
};

/// Records one user action in the usage metrics of its hour and day.
pub async fn snapshot_usage(
    app_state: &AppState<State>,
    protocol: &mut Lending_Protocol,
    block_number: i64,
    block_timestamp: i64,
    account_id: &str,
    event_type: EventType,
) -> Result<(), Error> {
    let store = &app_state.store;

    if !store.exists::<Account>(account_id).await? {
        store
            .save(&Account {
                id: account_id.to_owned(),
            })
            .await?;

        protocol.cumulative_unique_users += 1;
        store.save(protocol).await?;
    }

    let daily_id = usage_daily_snapshot_id(block_timestamp);
    let mut daily = match store
        .load::<Usage_Metrics_Daily_Snapshot>(&daily_id)
        .await?
    {
        Some(snapshot) => snapshot,
        None => Usage_Metrics_Daily_Snapshot {
            id: daily_id.to_owned(),
            protocol: protocol.id.to_owned(),
            block_number,
            timestamp: block_timestamp,
            counters: Usage_Counters::default(),
        },
    };

    update_counters(
        app_state,
        &mut daily.counters,
        protocol,
        account_id,
        &daily_id,
        event_type,
    )
    .await?;
    daily.block_number = block_number;
    daily.timestamp = block_timestamp;
    store.save(&daily).await?;

    let hourly_id = usage_hourly_snapshot_id(block_timestamp);
    let mut hourly = match store
        .load::<Usage_Metrics_Hourly_Snapshot>(&hourly_id)
        .await?
    {
        Some(snapshot) => snapshot,
        None => Usage_Metrics_Hourly_Snapshot {
            id: hourly_id.to_owned(),
            protocol: protocol.id.to_owned(),
            block_number,
            timestamp: block_timestamp,
            counters: Usage_Counters::default(),
        },
    };

    update_counters(
        app_state,
        &mut hourly.counters,
        protocol,
        account_id,
        &hourly_id,
        event_type,
    )
    .await?;
    hourly.block_number = block_number;
    hourly.timestamp = block_timestamp;
    store.save(&hourly).await
}

async fn update_counters(
    app_state: &AppState<State>,
    counters: &mut Usage_Counters,
    protocol: &Lending_Protocol,
    account_id: &str,
    bucket_id: &str,
    event_type: EventType,
) -> Result<(), Error> {
    let active_id = active_account_id(account_id, bucket_id);

    if !app_state.store.exists::<Active_Account>(&active_id).await? {
        app_state
            .store
            .save(&Active_Account { id: active_id })
            .await?;
        counters.active_users += 1;
    }

    counters.cumulative_unique_users = protocol.cumulative_unique_users;
    counters.record(event_type);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handler::protocol::get_or_create_protocol,
        helpers::math::{SECONDS_PER_DAY, SECONDS_PER_HOUR},
        test_support::{app_state, MockChain},
    };

    const DAY: i64 = SECONDS_PER_DAY * 19_000;

    async fn daily(app_state: &AppState<State>, ts: i64) -> Usage_Counters {
        app_state
            .store
            .load::<Usage_Metrics_Daily_Snapshot>(&usage_daily_snapshot_id(ts))
            .await
            .unwrap()
            .unwrap()
            .counters
    }

    async fn hourly(app_state: &AppState<State>, ts: i64) -> Usage_Counters {
        app_state
            .store
            .load::<Usage_Metrics_Hourly_Snapshot>(&usage_hourly_snapshot_id(
                ts,
            ))
            .await
            .unwrap()
            .unwrap()
            .counters
    }

    #[tokio::test]
    async fn test_snapshot_usage_counts_users_and_events() {
        let app_state = app_state(MockChain::default());
        let mut protocol = get_or_create_protocol(&app_state, 1).await.unwrap();

        let actions = [
            ("0xalice", DAY + 10, EventType::Deposit),
            ("0xalice", DAY + 20, EventType::Borrow),
            ("0xbob", DAY + 30, EventType::Deposit),
            ("0xalice", DAY + SECONDS_PER_HOUR + 5, EventType::Repay),
        ];

        for (account, ts, event_type) in actions {
            snapshot_usage(&app_state, &mut protocol, 1, ts, account, event_type)
                .await
                .unwrap();
        }

        assert_eq!(protocol.cumulative_unique_users, 2);

        let day = daily(&app_state, DAY).await;
        assert_eq!(day.active_users, 2);
        assert_eq!(day.cumulative_unique_users, 2);
        assert_eq!(day.transaction_count, 4);
        assert_eq!(day.deposit_count, 2);
        assert_eq!(day.borrow_count, 1);
        assert_eq!(day.repay_count, 1);
        assert_eq!(day.withdraw_count, 0);

        let first_hour = hourly(&app_state, DAY).await;
        assert_eq!(first_hour.active_users, 2);
        assert_eq!(first_hour.transaction_count, 3);

        let second_hour = hourly(&app_state, DAY + SECONDS_PER_HOUR).await;
        assert_eq!(second_hour.active_users, 1);
        assert_eq!(second_hour.transaction_count, 1);
        assert_eq!(second_hour.repay_count, 1);
    }

    #[tokio::test]
    async fn test_unique_users_span_days() {
        let app_state = app_state(MockChain::default());
        let mut protocol = get_or_create_protocol(&app_state, 1).await.unwrap();

        for ts in [DAY, DAY + SECONDS_PER_DAY] {
            snapshot_usage(
                &app_state,
                &mut protocol,
                1,
                ts,
                "0xalice",
                EventType::Withdraw,
            )
            .await
            .unwrap();
        }

        let next_day = daily(&app_state, DAY + SECONDS_PER_DAY).await;
        assert_eq!(next_day.active_users, 1);
        assert_eq!(next_day.cumulative_unique_users, 1);

        let stored = get_or_create_protocol(&app_state, 1).await.unwrap();
        assert_eq!(stored.cumulative_unique_users, 1);
    }
}
