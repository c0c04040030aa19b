//! Repositories over the key-value cache mirror of Discord state.
//!
//! Every key starts with `drss`. Guild and channel membership is tracked in sets so
//! a guild (or a whole shard) can be forgotten without scanning the keyspace.

pub mod channel;
pub mod guild;
pub mod user;

pub use channel::ChannelMirror;
pub use guild::GuildMirror;
pub use user::UserMirror;

use serde::{de::DeserializeOwned, Serialize};

use crate::server::{cache::CacheStore, error::cache::CacheError};

pub const GUILDS_KEY: &str = "drss_guilds";

pub fn guild_key(guild_id: u64) -> String {
    format!("drss_guild_{}", guild_id)
}

pub fn guild_channels_key(guild_id: u64) -> String {
    format!("drss_guild_channels_{}", guild_id)
}

pub fn channel_key(channel_id: u64) -> String {
    format!("drss_channel_{}", channel_id)
}

pub fn user_key(user_id: u64) -> String {
    format!("drss_user_{}", user_id)
}

pub fn shard_guilds_key(shard_id: u32) -> String {
    format!("drss_shard_guilds_{}", shard_id)
}

async fn write_json<T: Serialize>(
    cache: &dyn CacheStore,
    key: &str,
    value: &T,
) -> Result<(), CacheError> {
    let json = serde_json::to_string(value).map_err(|source| CacheError::Serde {
        key: key.to_string(),
        source,
    })?;

    cache.set(key, json).await
}

async fn read_json<T: DeserializeOwned>(
    cache: &dyn CacheStore,
    key: &str,
) -> Result<Option<T>, CacheError> {
    let Some(json) = cache.get(key).await? else {
        return Ok(None);
    };

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| CacheError::Serde {
            key: key.to_string(),
            source,
        })
}

/// Parses set members written by the mirror, skipping anything foreign.
fn parse_ids(members: Vec<String>) -> Vec<u64> {
    members
        .into_iter()
        .filter_map(|member| member.parse::<u64>().ok())
        .collect()
}

#[cfg(test)]
mod test;
