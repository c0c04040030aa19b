use crate::server::{
    cache::CacheStore,
    data::mirror::{
        channel::ChannelMirror, guild_key, parse_ids, read_json, shard_guilds_key, write_json,
        GUILDS_KEY,
    },
    error::cache::CacheError,
    model::mirror::CachedGuild,
};

pub struct GuildMirror<'a> {
    cache: &'a dyn CacheStore,
}

impl<'a> GuildMirror<'a> {
    pub fn new(cache: &'a dyn CacheStore) -> Self {
        Self { cache }
    }

    /// Stores the guild snapshot and registers it with its shard.
    pub async fn recognize(&self, guild: &CachedGuild) -> Result<(), CacheError> {
        let id = guild.id.to_string();

        write_json(self.cache, &guild_key(guild.id), guild).await?;
        self.cache.sadd(GUILDS_KEY, &id).await?;
        self.cache
            .sadd(&shard_guilds_key(guild.shard_id), &id)
            .await
    }

    pub async fn fetch(&self, guild_id: u64) -> Result<Option<CachedGuild>, CacheError> {
        read_json(self.cache, &guild_key(guild_id)).await
    }

    pub async fn exists(&self, guild_id: u64) -> Result<bool, CacheError> {
        Ok(self.cache.get(&guild_key(guild_id)).await?.is_some())
    }

    /// Removes the guild, its channels and its set memberships.
    pub async fn forget(&self, guild_id: u64) -> Result<(), CacheError> {
        let id = guild_id.to_string();

        if let Some(guild) = self.fetch(guild_id).await? {
            self.cache
                .srem(&shard_guilds_key(guild.shard_id), &id)
                .await?;
        }

        ChannelMirror::new(self.cache)
            .forget_guild_channels(guild_id)
            .await?;
        self.cache.srem(GUILDS_KEY, &id).await?;
        self.cache.del(&[guild_key(guild_id)]).await
    }

    /// Forgets every guild the shard recognized previously.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of guilds forgotten
    pub async fn forget_shard(&self, shard_id: u32) -> Result<usize, CacheError> {
        let shard_key = shard_guilds_key(shard_id);
        let guild_ids = parse_ids(self.cache.smembers(&shard_key).await?);

        for guild_id in &guild_ids {
            self.forget(*guild_id).await?;
        }
        self.cache.del(&[shard_key]).await?;

        Ok(guild_ids.len())
    }

    /// Number of guilds known to any shard.
    pub async fn count(&self) -> Result<u64, CacheError> {
        self.cache.scard(GUILDS_KEY).await
    }
}
