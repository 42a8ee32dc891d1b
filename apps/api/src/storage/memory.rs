//! In-process `KvStore`. Contents are lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use glob::Pattern;
use tokio::sync::RwLock;

use super::{KvStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn list(&self, pattern: &str) -> Result<Vec<String>, StorageError> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|key| pattern.matches(key))
            .cloned()
            .collect())
    }
}
