use super::math::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Days since the unix epoch.
pub fn daily_bucket(timestamp: i64) -> i64 {
    timestamp / SECONDS_PER_DAY
}

/// `{day}-{hour of day}`
pub fn hourly_bucket(timestamp: i64) -> String {
    let hour = (timestamp / SECONDS_PER_HOUR) % 24;
    format!("{}-{}", daily_bucket(timestamp), hour)
}

pub fn market_daily_snapshot_id(market_id: &str, timestamp: i64) -> String {
    format!("{}-{}", market_id, daily_bucket(timestamp))
}

pub fn market_hourly_snapshot_id(market_id: &str, timestamp: i64) -> String {
    format!("{}-{}", market_id, hourly_bucket(timestamp))
}

pub fn financials_daily_snapshot_id(timestamp: i64) -> String {
    daily_bucket(timestamp).to_string()
}

pub fn usage_daily_snapshot_id(timestamp: i64) -> String {
    daily_bucket(timestamp).to_string()
}

pub fn usage_hourly_snapshot_id(timestamp: i64) -> String {
    hourly_bucket(timestamp)
}

pub fn active_account_id(account_id: &str, bucket_id: &str) -> String {
    format!("{}-{}", account_id, bucket_id)
}

/// `{transaction hash}-{log index}`
pub fn event_id(transaction_hash: &str, log_index: i64) -> String {
    format!("{}-{}", transaction_hash, log_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_bucket_is_stable_within_a_day() {
        let k = 19_000;
        let start = SECONDS_PER_DAY * k;
        let end = SECONDS_PER_DAY * (k + 1) - 1;

        assert_eq!(daily_bucket(start), k);
        assert_eq!(daily_bucket(start + 43_200), k);
        assert_eq!(daily_bucket(end), k);
        assert_eq!(daily_bucket(end + 1), k + 1);
    }

    #[test]
    fn test_hourly_bucket_partitions_a_day() {
        let day_start = SECONDS_PER_DAY * 19_000;

        let buckets: Vec<String> = (0..24)
            .map(|hour| hourly_bucket(day_start + hour * SECONDS_PER_HOUR))
            .collect();

        for (hour, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket, &format!("19000-{}", hour));
        }

        assert_eq!(hourly_bucket(day_start + SECONDS_PER_HOUR - 1), "19000-0");
        assert_eq!(hourly_bucket(day_start + SECONDS_PER_DAY), "19001-0");
    }

    #[test]
    fn test_snapshot_ids() {
        let ts = SECONDS_PER_DAY * 19_000 + SECONDS_PER_HOUR * 5 + 17;

        assert_eq!(market_daily_snapshot_id("0xabc", ts), "0xabc-19000");
        assert_eq!(market_hourly_snapshot_id("0xabc", ts), "0xabc-19000-5");
        assert_eq!(financials_daily_snapshot_id(ts), "19000");
        assert_eq!(usage_hourly_snapshot_id(ts), "19000-5");
        assert_eq!(active_account_id("0xuser", "19000-5"), "0xuser-19000-5");
        assert_eq!(event_id("0xhash", 3), "0xhash-3");
    }
}
