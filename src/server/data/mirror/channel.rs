use crate::server::{
    cache::CacheStore,
    data::mirror::{channel_key, guild_channels_key, parse_ids, read_json, write_json},
    error::cache::CacheError,
    model::mirror::CachedChannel,
};

pub struct ChannelMirror<'a> {
    cache: &'a dyn CacheStore,
}

impl<'a> ChannelMirror<'a> {
    pub fn new(cache: &'a dyn CacheStore) -> Self {
        Self { cache }
    }

    pub async fn recognize(&self, channel: &CachedChannel) -> Result<(), CacheError> {
        write_json(self.cache, &channel_key(channel.id), channel).await?;
        self.cache
            .sadd(
                &guild_channels_key(channel.guild_id),
                &channel.id.to_string(),
            )
            .await
    }

    pub async fn fetch(&self, channel_id: u64) -> Result<Option<CachedChannel>, CacheError> {
        read_json(self.cache, &channel_key(channel_id)).await
    }

    pub async fn forget(&self, channel_id: u64) -> Result<(), CacheError> {
        if let Some(channel) = self.fetch(channel_id).await? {
            self.cache
                .srem(
                    &guild_channels_key(channel.guild_id),
                    &channel_id.to_string(),
                )
                .await?;
        }

        self.cache.del(&[channel_key(channel_id)]).await
    }

    /// Gets the mirrored channels of a guild in no particular order.
    ///
    /// Members of the guild's channel set whose snapshot is missing are skipped.
    pub async fn get_guild_channels(&self, guild_id: u64) -> Result<Vec<CachedChannel>, CacheError> {
        let channel_ids = parse_ids(self.cache.smembers(&guild_channels_key(guild_id)).await?);

        let mut channels = Vec::with_capacity(channel_ids.len());
        for channel_id in channel_ids {
            if let Some(channel) = self.fetch(channel_id).await? {
                channels.push(channel);
            }
        }

        Ok(channels)
    }

    /// Whether the channel is mirrored and belongs to the guild.
    pub async fn guild_has_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, CacheError> {
        Ok(self
            .fetch(channel_id)
            .await?
            .is_some_and(|channel| channel.guild_id == guild_id))
    }

    pub async fn forget_guild_channels(&self, guild_id: u64) -> Result<(), CacheError> {
        let set_key = guild_channels_key(guild_id);
        let mut keys: Vec<String> = parse_ids(self.cache.smembers(&set_key).await?)
            .into_iter()
            .map(channel_key)
            .collect();
        keys.push(set_key);

        self.cache.del(&keys).await
    }
}
