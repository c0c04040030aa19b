//! Guild channel lookups against the cache mirror.

use crate::server::{
    cache::CacheStore, data::mirror::ChannelMirror, error::AppError,
    model::mirror::CachedChannel,
};

pub struct ChannelService<'a> {
    cache: &'a dyn CacheStore,
}

impl<'a> ChannelService<'a> {
    pub fn new(cache: &'a dyn CacheStore) -> Self {
        Self { cache }
    }

    /// Gets the guild's text and announcement channels sorted by name.
    pub async fn get_channels(&self, guild_id: u64) -> Result<Vec<CachedChannel>, AppError> {
        let mut channels = ChannelMirror::new(self.cache)
            .get_guild_channels(guild_id)
            .await?;
        sort_channels(&mut channels);

        Ok(channels)
    }

    pub async fn guild_has_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        Ok(ChannelMirror::new(self.cache)
            .guild_has_channel(guild_id, channel_id)
            .await?)
    }
}

/// Sorts by name, falling back to ID so equal names keep a stable order.
fn sort_channels(channels: &mut [CachedChannel]) {
    channels.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::cache::memory::MemoryCache;

    fn channel(id: u64, guild_id: u64, name: &str) -> CachedChannel {
        CachedChannel {
            id,
            guild_id,
            name: name.to_string(),
            kind: "text".to_string(),
            position: 0,
        }
    }

    /// Tests the channel ordering.
    ///
    /// Expected: sorted by name, ties broken by ID
    #[test]
    fn sorts_by_name_then_id() {
        let mut channels = vec![
            channel(3, 1, "news"),
            channel(2, 1, "general"),
            channel(1, 1, "news"),
        ];

        sort_channels(&mut channels);

        let ids: Vec<u64> = channels.iter().map(|channel| channel.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    /// Tests listing channels through the mirror.
    ///
    /// Expected: only channels of the requested guild, sorted by name
    #[tokio::test]
    async fn lists_guild_channels_sorted() -> Result<(), AppError> {
        let cache = MemoryCache::new();
        let mirror = ChannelMirror::new(&cache);
        mirror.recognize(&channel(10, 1, "updates")).await?;
        mirror.recognize(&channel(11, 1, "alerts")).await?;
        mirror.recognize(&channel(12, 2, "other")).await?;

        let channels = ChannelService::new(&cache).get_channels(1).await?;

        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alerts", "updates"]);

        Ok(())
    }

    /// Tests channel ownership checks.
    ///
    /// Expected: true for the owning guild only
    #[tokio::test]
    async fn guild_has_channel_checks_owner() -> Result<(), AppError> {
        let cache = MemoryCache::new();
        ChannelMirror::new(&cache)
            .recognize(&channel(10, 1, "general"))
            .await?;
        let service = ChannelService::new(&cache);

        assert!(service.guild_has_channel(1, 10).await?);
        assert!(!service.guild_has_channel(2, 10).await?);
        assert!(!service.guild_has_channel(1, 99).await?);

        Ok(())
    }
}
