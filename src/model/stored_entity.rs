use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Stored_Entity {
    pub kind: String,
    pub id: String,
    pub data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
