//! Public statistics shown on the home page.

use sea_orm::DatabaseConnection;

use crate::{
    model::stats::StatsDto,
    server::{
        cache::CacheStore,
        data::{
            feed::FeedRepository,
            general_stats::{GeneralStatsRepository, ARTICLES_SENT},
            mirror::GuildMirror,
        },
        error::AppError,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore) -> Self {
        Self { db, cache }
    }

    /// Counts mirrored guilds, distinct feed URLs and articles sent.
    pub async fn get_stats(&self) -> Result<StatsDto, AppError> {
        let guilds = GuildMirror::new(self.cache).count().await?;
        let feeds = FeedRepository::new(self.db).count_distinct_urls().await?;
        let articles_delivered = GeneralStatsRepository::new(self.db)
            .get(ARTICLES_SENT)
            .await?;

        Ok(StatsDto {
            guilds,
            feeds,
            articles_delivered: articles_delivered.max(0) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{cache::memory::MemoryCache, model::mirror::CachedGuild};
    use test_utils::{builder::TestBuilder, factory::feed::FeedFactory};

    /// Tests stats aggregation.
    ///
    /// Two guilds mirrored, three feeds sharing two URLs and a counter of 7.
    ///
    /// Expected: 2 guilds, 2 feeds, 7 articles
    #[tokio::test]
    async fn aggregates_counts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();

        for id in [1, 2] {
            GuildMirror::new(&cache)
                .recognize(&CachedGuild {
                    id,
                    name: "Guild".to_string(),
                    icon: None,
                    owner_id: 1,
                    member_count: 1,
                    shard_id: 0,
                })
                .await?;
        }
        FeedFactory::new(db, "1").url("https://a.example/rss").build().await?;
        FeedFactory::new(db, "2").url("https://a.example/rss").build().await?;
        FeedFactory::new(db, "2").url("https://b.example/rss").build().await?;
        GeneralStatsRepository::new(db)
            .increment(ARTICLES_SENT, 7)
            .await?;

        let stats = StatsService::new(db, &cache).get_stats().await?;

        assert_eq!(stats.guilds, 2);
        assert_eq!(stats.feeds, 2);
        assert_eq!(stats.articles_delivered, 7);

        Ok(())
    }

    /// Tests stats on an empty deployment.
    ///
    /// Expected: all zero
    #[tokio::test]
    async fn empty_stats() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();

        let stats = StatsService::new(db, &cache).get_stats().await?;

        assert_eq!(stats.guilds, 0);
        assert_eq!(stats.feeds, 0);
        assert_eq!(stats.articles_delivered, 0);

        Ok(())
    }
}
