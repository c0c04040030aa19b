//! Feed factory for creating test feed rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test feeds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let feed = FeedFactory::new(&db, "123456789")
///     .url("https://example.com/rss")
///     .disabled(true)
///     .build()
///     .await?;
/// ```
pub struct FeedFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    title: String,
    url: String,
    text: Option<String>,
    check_titles: bool,
    image_previews: bool,
    disabled: bool,
}

impl<'a> FeedFactory<'a> {
    /// Creates a new FeedFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented ID
    /// - title: `"Feed {id}"`
    /// - url: `"https://example.com/{id}/rss"`
    /// - text: `None`
    /// - image_previews: `true`, other flags `false`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: (900_000 + id).to_string(),
            title: format!("Feed {}", id),
            url: format!("https://example.com/{}/rss", id),
            text: None,
            check_titles: false,
            image_previews: true,
            disabled: false,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn check_titles(mut self, check_titles: bool) -> Self {
        self.check_titles = check_titles;
        self
    }

    pub fn image_previews(mut self, image_previews: bool) -> Self {
        self.image_previews = image_previews;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builds and inserts the feed row.
    ///
    /// # Returns
    /// - `Ok(entity::feed::Model)` - Created feed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feed::Model, DbErr> {
        entity::feed::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            text: ActiveValue::Set(self.text),
            check_titles: ActiveValue::Set(self.check_titles),
            image_previews: ActiveValue::Set(self.image_previews),
            disabled: ActiveValue::Set(self.disabled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a feed in the given guild with default values.
pub async fn create_feed(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::feed::Model, DbErr> {
    FeedFactory::new(db, guild_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_feed_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Feed).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let feed = create_feed(db, "123").await?;

        assert_eq!(feed.guild_id, "123");
        assert!(feed.url.starts_with("https://"));
        assert!(feed.image_previews);
        assert!(!feed.disabled);

        Ok(())
    }

    #[tokio::test]
    async fn creates_unique_feeds() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Feed).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_feed(db, "123").await?;
        let second = create_feed(db, "123").await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.url, second.url);

        Ok(())
    }
}
