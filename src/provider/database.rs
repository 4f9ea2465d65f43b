use std::fs;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::{
    configuration::Config,
    dao::{get_path, EntityStore, PoolOption, PoolType},
    error::Error,
    model::{Stored_Entity, Table},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub entity: Table<Stored_Entity>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .max_connections(config.max_connections)
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool {
            entity: Table::new(pool.clone()),
            pool,
        })
    }

    pub async fn init_migrations(&self) -> Result<(), Error> {
        let files = vec!["entity.sql"];
        let dir = env!("CARGO_MANIFEST_DIR");

        for file in files {
            let path = get_path(dir, file);
            let data = fs::read_to_string(path)?;
            sqlx::query(data.as_str()).execute(&self.pool).await?;
            info!("Migration {} applied", file);
        }

        Ok(())
    }
}

#[async_trait]
impl EntityStore for DatabasePool {
    async fn get(&self, kind: &str, id: &str) -> Result<Option<Value>, Error> {
        let item = self.entity.get_one(kind, id).await?;
        Ok(item.map(|item| item.data))
    }

    async fn set(
        &self,
        kind: &str,
        id: &str,
        data: Value,
    ) -> Result<(), Error> {
        let item = Stored_Entity {
            kind: kind.to_owned(),
            id: id.to_owned(),
            data,
            updated_at: Utc::now(),
        };

        self.entity.upsert(&item).await?;

        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "postgresql"
    }
}
