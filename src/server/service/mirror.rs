//! Keeps the cache mirror in step with gateway state.

use dioxus_logger::tracing;
use serenity::all::{Guild, GuildChannel, PartialGuild, User};

use crate::server::{
    cache::{CacheStore, KEY_PREFIX},
    data::mirror::{ChannelMirror, GuildMirror, UserMirror},
    error::cache::CacheError,
    model::mirror::{CachedChannel, CachedGuild, CachedUser},
};

pub struct MirrorService<'a> {
    cache: &'a dyn CacheStore,
}

impl<'a> MirrorService<'a> {
    pub fn new(cache: &'a dyn CacheStore) -> Self {
        Self { cache }
    }

    /// Deletes every mirror key. Run once before any shard starts.
    pub async fn flush_all(&self) -> Result<usize, CacheError> {
        let removed = self.cache.flush(KEY_PREFIX).await?;
        tracing::debug!("Flushed {} cache mirror keys", removed);
        Ok(removed)
    }

    /// Stores a guild and its postable channels.
    pub async fn recognize_guild(&self, guild: &Guild, shard_id: u32) -> Result<(), CacheError> {
        let channels = ChannelMirror::new(self.cache);

        GuildMirror::new(self.cache)
            .recognize(&CachedGuild::from_guild(guild, shard_id))
            .await?;

        for channel in guild.channels.values() {
            if let Some(cached) = CachedChannel::from_channel(channel) {
                channels.recognize(&cached).await?;
            }
        }

        Ok(())
    }

    /// Applies a guild update, ignoring guilds that were never recognized.
    pub async fn update_guild(&self, guild: &PartialGuild) -> Result<(), CacheError> {
        let mirror = GuildMirror::new(self.cache);

        let Some(mut cached) = mirror.fetch(guild.id.get()).await? else {
            return Ok(());
        };
        cached.apply_update(guild);

        mirror.recognize(&cached).await
    }

    pub async fn forget_guild(&self, guild_id: u64) -> Result<(), CacheError> {
        GuildMirror::new(self.cache).forget(guild_id).await
    }

    /// Stores a channel, or forgets it if it can no longer receive articles.
    pub async fn recognize_channel(&self, channel: &GuildChannel) -> Result<(), CacheError> {
        let mirror = ChannelMirror::new(self.cache);

        match CachedChannel::from_channel(channel) {
            Some(cached) => mirror.recognize(&cached).await,
            None => mirror.forget(channel.id.get()).await,
        }
    }

    pub async fn forget_channel(&self, channel_id: u64) -> Result<(), CacheError> {
        ChannelMirror::new(self.cache).forget(channel_id).await
    }

    pub async fn recognize_user(&self, user: &User) -> Result<(), CacheError> {
        UserMirror::new(self.cache)
            .recognize(&CachedUser::from_user(user))
            .await
    }

    /// Replaces everything a shard previously mirrored with its current guilds.
    ///
    /// Guilds recognized by other shards are untouched.
    pub async fn repopulate_shard(&self, shard_id: u32, guilds: &[Guild]) -> Result<(), CacheError> {
        let forgotten = GuildMirror::new(self.cache).forget_shard(shard_id).await?;
        tracing::debug!("Shard {} forgot {} stale guilds", shard_id, forgotten);

        for guild in guilds {
            self.recognize_guild(guild, shard_id).await?;
            for member in guild.members.values() {
                self.recognize_user(&member.user).await?;
            }
        }

        Ok(())
    }
}
