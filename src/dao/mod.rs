use std::fmt::Debug;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::Error;

pub use memory::MemoryStore;
pub use postgre::{get_path, PoolOption, PoolType, QueryResult};

mod memory;
mod postgre;

/// Key/value persistence for entity documents, addressed by
/// `(kind, id)`.
#[async_trait]
pub trait EntityStore: Debug + Send + Sync {
    async fn get(&self, kind: &str, id: &str) -> Result<Option<Value>, Error>;

    async fn set(&self, kind: &str, id: &str, data: Value)
        -> Result<(), Error>;

    /// Backend name for logging.
    fn backend_type(&self) -> &'static str;
}

pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Typed facade over an [`EntityStore`] backend.
#[derive(Debug)]
pub struct Store {
    inner: Box<dyn EntityStore>,
}

impl Store {
    pub fn new<S: EntityStore + 'static>(inner: S) -> Store {
        Store {
            inner: Box::new(inner),
        }
    }

    pub async fn load<T: Entity>(&self, id: &str) -> Result<Option<T>, Error> {
        match self.inner.get(T::KIND, id).await? {
            Some(data) => Ok(Some(serde_json::from_value(data)?)),
            None => Ok(None),
        }
    }

    pub async fn exists<T: Entity>(&self, id: &str) -> Result<bool, Error> {
        let item = self.inner.get(T::KIND, id).await?;
        Ok(item.is_some())
    }

    pub async fn save<T: Entity>(&self, entity: &T) -> Result<(), Error> {
        let data = serde_json::to_value(entity)?;
        self.inner.set(T::KIND, entity.id(), data).await
    }

    pub fn backend_type(&self) -> &'static str {
        self.inner.backend_type()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: String,
        value: i64,
    }

    impl Entity for Sample {
        const KIND: &'static str = "Sample";

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Other {
        id: String,
    }

    impl Entity for Other {
        const KIND: &'static str = "Other";

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let store = Store::new(MemoryStore::new());
        let item = Sample {
            id: String::from("a"),
            value: 5,
        };

        assert_eq!(store.load::<Sample>("a").await.unwrap(), None);

        store.save(&item).await.unwrap();

        assert_eq!(store.load::<Sample>("a").await.unwrap(), Some(item));
        assert!(store.exists::<Sample>("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_separates_kinds() {
        let store = Store::new(MemoryStore::new());

        store
            .save(&Other {
                id: String::from("shared"),
            })
            .await
            .unwrap();

        assert!(!store.exists::<Sample>("shared").await.unwrap());
        assert!(store.exists::<Other>("shared").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_save_overwrites() {
        let store = Store::new(MemoryStore::new());

        for value in [1, 2] {
            store
                .save(&Sample {
                    id: String::from("a"),
                    value,
                })
                .await
                .unwrap();
        }

        let item = store.load::<Sample>("a").await.unwrap().unwrap();
        assert_eq!(item.value, 2);
    }
}
