use serde::Deserialize;

/// Provenance of a decoded log, attached to every inbound event.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    pub transaction_hash: String,
    pub log_index: i64,
    pub block_number: i64,
    pub block_timestamp: i64,
    /// Contract that emitted the log.
    #[serde(deserialize_with = "super::address::lowercase")]
    pub address: String,
}
