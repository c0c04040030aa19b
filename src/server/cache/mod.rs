//! Key-value store backing the Discord cache mirror.
//!
//! The mirror only needs plain string values and string sets, so the store is
//! exposed as a small async trait. Production uses Redis; tests use an in-memory
//! implementation with the same semantics.

pub mod redis;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;

use crate::server::error::cache::CacheError;

/// Prefix shared by every key the mirror writes.
pub const KEY_PREFIX: &str = "drss";

/// Shared handle to the cache store.
pub type Cache = Arc<dyn CacheStore>;

#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;

    /// Deletes the given keys. Missing keys are ignored.
    async fn del(&self, keys: &[String]) -> Result<(), CacheError>;

    /// Returns all keys starting with `prefix`.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError>;

    async fn sadd(&self, key: &str, member: &str) -> Result<(), CacheError>;

    async fn srem(&self, key: &str, member: &str) -> Result<(), CacheError>;

    async fn smembers(&self, key: &str) -> Result<Vec<String>, CacheError>;

    async fn scard(&self, key: &str) -> Result<u64, CacheError>;

    /// Deletes every key starting with `prefix`, returning how many were removed.
    async fn flush(&self, prefix: &str) -> Result<usize, CacheError> {
        let keys = self.keys(prefix).await?;
        if keys.is_empty() {
            return Ok(0);
        }

        self.del(&keys).await?;

        Ok(keys.len())
    }
}
