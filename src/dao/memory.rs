use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

use super::EntityStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entities: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get(&self, kind: &str, id: &str) -> Result<Option<Value>, Error> {
        let entities = self
            .entities
            .lock()
            .map_err(|e| Error::LockError(e.to_string()))?;

        Ok(entities.get(&(kind.to_owned(), id.to_owned())).cloned())
    }

    async fn set(
        &self,
        kind: &str,
        id: &str,
        data: Value,
    ) -> Result<(), Error> {
        let mut entities = self
            .entities
            .lock()
            .map_err(|e| Error::LockError(e.to_string()))?;

        entities.insert((kind.to_owned(), id.to_owned()), data);

        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
