//! Key-value persistence behind a small async trait.
//!
//! Two backends: `MemoryStore` (tests, local runs without `REDIS_URL`) and `RedisStore`.
//! `AnalysisRepository` layers the `job_analysis:` record format on top of either.

pub mod memory;
pub mod redis_store;
pub mod repository;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Backend(String),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid key pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("corrupt record under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed, string-valued store. Keys are flat; `list` takes a Redis-style glob
/// (`*` matches any run of characters).
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Inserts or replaces. Returns true once the value is stored.
    async fn set(&self, key: &str, value: &str) -> Result<bool, StorageError>;

    /// Returns true if the key existed.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    async fn list(&self, pattern: &str) -> Result<Vec<String>, StorageError>;
}
