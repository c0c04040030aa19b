use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client,
};
use std::time::Duration;

use crate::server::{cache::CacheStore, error::cache::CacheError};

/// Keys requested per SCAN round trip.
const SCAN_BATCH: usize = 500;

/// Redis-backed cache store shared by all shards and the HTTP layer.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis with a reconnecting connection manager.
    ///
    /// # Arguments
    /// - `redis_url` - Connection string such as `redis://127.0.0.1/`
    ///
    /// # Returns
    /// - `Ok(RedisCache)` - Connected store
    /// - `Err(CacheError::Redis)` - Invalid URL or the server is unreachable
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_secs(5));

        let client = Client::open(redis_url)?;
        let conn = client.get_connection_manager_with_config(config).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        Ok(conn.get(key).await?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn.clone();
        let _: () = redis::pipe()
            .atomic()
            .del(keys)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Collects matching keys with incremental SCAN so Redis is never blocked.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError> {
        let mut conn = self.conn.clone();
        let pattern = scan_pattern(prefix);
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;
            keys.extend(batch);

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        keys.sort_unstable();
        keys.dedup();

        Ok(keys)
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.sadd(key, member).await?;
        Ok(())
    }

    async fn srem(&self, key: &str, member: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.srem(key, member).await?;
        Ok(())
    }

    async fn smembers(&self, key: &str) -> Result<Vec<String>, CacheError> {
        let mut conn = self.conn.clone();
        Ok(conn.smembers(key).await?)
    }

    async fn scard(&self, key: &str) -> Result<u64, CacheError> {
        let mut conn = self.conn.clone();
        Ok(conn.scard(key).await?)
    }
}

/// Glob pattern matching every key that starts with `prefix`.
fn scan_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}
