use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::server::{
    cache::{Cache, CacheStore},
    error::cache::CacheError,
};

enum Entry {
    Value(String),
    Set(BTreeSet<String>),
}

/// In-process cache store with Redis-like semantics.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already wrapped in the shared `Cache` handle.
    pub fn shared() -> Cache {
        Arc::new(Self::new())
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(match self.entries().get(key) {
            Some(Entry::Value(value)) => Some(value.clone()),
            _ => None,
        })
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.entries().insert(key.to_string(), Entry::Value(value));
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> Result<(), CacheError> {
        let mut entries = self.entries();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError> {
        Ok(self
            .entries()
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<(), CacheError> {
        let mut entries = self.entries();
        match entries.get_mut(key) {
            Some(Entry::Set(set)) => {
                set.insert(member.to_string());
            }
            _ => {
                entries.insert(
                    key.to_string(),
                    Entry::Set(BTreeSet::from([member.to_string()])),
                );
            }
        }
        Ok(())
    }

    async fn srem(&self, key: &str, member: &str) -> Result<(), CacheError> {
        let mut entries = self.entries();
        let now_empty = match entries.get_mut(key) {
            Some(Entry::Set(set)) => {
                set.remove(member);
                set.is_empty()
            }
            _ => false,
        };
        // Redis drops empty sets
        if now_empty {
            entries.remove(key);
        }
        Ok(())
    }

    async fn smembers(&self, key: &str) -> Result<Vec<String>, CacheError> {
        Ok(match self.entries().get(key) {
            Some(Entry::Set(set)) => set.iter().cloned().collect(),
            _ => Vec::new(),
        })
    }

    async fn scard(&self, key: &str) -> Result<u64, CacheError> {
        Ok(match self.entries().get(key) {
            Some(Entry::Set(set)) => set.len() as u64,
            _ => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that flushing removes only prefixed keys.
    ///
    /// Expected: prefixed keys deleted, other keys kept
    #[tokio::test]
    async fn flush_removes_prefixed_keys() -> Result<(), CacheError> {
        let cache = MemoryCache::new();
        cache.set("drss_guild_1", "{}".to_string()).await?;
        cache.sadd("drss_guilds", "1").await?;
        cache.set("other_key", "kept".to_string()).await?;

        let removed = cache.flush("drss").await?;

        assert_eq!(removed, 2);
        assert_eq!(cache.get("drss_guild_1").await?, None);
        assert_eq!(cache.scard("drss_guilds").await?, 0);
        assert_eq!(cache.get("other_key").await?, Some("kept".to_string()));

        Ok(())
    }

    /// Tests set membership bookkeeping.
    ///
    /// Expected: duplicates ignored, removal shrinks the set
    #[tokio::test]
    async fn tracks_set_members() -> Result<(), CacheError> {
        let cache = MemoryCache::new();
        cache.sadd("drss_guilds", "1").await?;
        cache.sadd("drss_guilds", "1").await?;
        cache.sadd("drss_guilds", "2").await?;

        assert_eq!(cache.scard("drss_guilds").await?, 2);

        cache.srem("drss_guilds", "1").await?;

        assert_eq!(cache.smembers("drss_guilds").await?, vec!["2".to_string()]);

        Ok(())
    }
}
