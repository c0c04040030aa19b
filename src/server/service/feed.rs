//! Feed service for business logic.
//!
//! Validates feed input, enforces the per-guild feed limit and checks that target
//! channels belong to the guild before anything is written. Also renders and
//! sends articles on behalf of a feed.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::{all::ChannelId, http::Http};
use url::Url;

use crate::{
    model::feed::{CreateFeedDto, SendArticleDto, SentMessageDto, UpdateFeedDto},
    server::{
        cache::CacheStore,
        data::{
            feed::FeedRepository,
            general_stats::{GeneralStatsRepository, ARTICLES_SENT},
        },
        error::AppError,
        model::feed::{CreateFeedParam, FeedParam, UpdateFeedParam},
        service::channel::ChannelService,
    },
};

const MAX_TITLE_LENGTH: usize = 256;
/// Discord's message content limit
const MAX_MESSAGE_LENGTH: usize = 2000;
const DEFAULT_FORMAT: &str = "{title}\n{link}";

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
    feed_limit: u64,
}

impl<'a> FeedService<'a> {
    /// Creates a new FeedService instance.
    ///
    /// # Arguments
    /// - `db` - Database holding feeds and counters
    /// - `cache` - Cache store used to check channel ownership
    /// - `feed_limit` - Maximum number of feeds per guild
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore, feed_limit: u64) -> Self {
        Self {
            db,
            cache,
            feed_limit,
        }
    }

    pub async fn get_feeds(&self, guild_id: u64) -> Result<Vec<FeedParam>, AppError> {
        Ok(FeedRepository::new(self.db).get_by_guild(guild_id).await?)
    }

    /// Creates a feed in the guild.
    ///
    /// # Returns
    /// - `Ok(FeedParam)` - Created feed
    /// - `Err(AppError::BadRequest)` - Invalid input, foreign channel or feed limit reached
    pub async fn create_feed(
        &self,
        guild_id: u64,
        mut dto: CreateFeedDto,
    ) -> Result<FeedParam, AppError> {
        dto.title = validate_title(&dto.title)?;
        dto.url = validate_url(&dto.url)?;
        dto.text = normalize_text(dto.text)?;
        self.require_guild_channel(guild_id, dto.channel_id).await?;

        let repo = FeedRepository::new(self.db);
        if repo.count_by_guild(guild_id).await? >= self.feed_limit {
            return Err(AppError::BadRequest(format!(
                "Feed limit of {} reached",
                self.feed_limit
            )));
        }

        Ok(repo.create(CreateFeedParam::from_dto(guild_id, dto)).await?)
    }

    /// Applies a partial update to a feed of the guild.
    ///
    /// # Returns
    /// - `Ok(FeedParam)` - Feed after the update
    /// - `Err(AppError::NotFound)` - Feed does not exist in this guild
    /// - `Err(AppError::BadRequest)` - Invalid input or foreign channel
    pub async fn update_feed(
        &self,
        guild_id: u64,
        feed_id: i32,
        dto: UpdateFeedDto,
    ) -> Result<FeedParam, AppError> {
        let repo = FeedRepository::new(self.db);
        self.require_feed(&repo, guild_id, feed_id).await?;

        let mut param = UpdateFeedParam::from_dto(dto);
        if let Some(title) = &param.title {
            param.title = Some(validate_title(title)?);
        }
        if let Some(url) = &param.url {
            param.url = Some(validate_url(url)?);
        }
        if let Some(Some(text)) = &param.text {
            normalize_text(Some(text.clone()))?;
        }
        if let Some(channel_id) = param.channel_id {
            self.require_guild_channel(guild_id, channel_id).await?;
        }

        Ok(repo.update(feed_id, param).await?)
    }

    pub async fn delete_feed(&self, guild_id: u64, feed_id: i32) -> Result<(), AppError> {
        let repo = FeedRepository::new(self.db);
        self.require_feed(&repo, guild_id, feed_id).await?;

        Ok(repo.delete(feed_id).await?)
    }

    /// Renders an article with the feed's format and posts it to a guild channel.
    ///
    /// The message goes to `dto.channel_id` when given, otherwise to the feed's
    /// own channel. Each delivery increments the articles sent counter.
    pub async fn send_article(
        &self,
        http: &Http,
        guild_id: u64,
        feed_id: i32,
        dto: SendArticleDto,
    ) -> Result<SentMessageDto, AppError> {
        let repo = FeedRepository::new(self.db);
        let feed = self.require_feed(&repo, guild_id, feed_id).await?;

        let channel_id = dto.channel_id.unwrap_or(feed.channel_id);
        self.require_guild_channel(guild_id, channel_id).await?;

        let content = render_article(feed.text.as_deref(), &dto.article);
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Rendered article is empty".to_string(),
            ));
        }

        let message = ChannelId::new(channel_id).say(http, content).await?;

        GeneralStatsRepository::new(self.db)
            .increment(ARTICLES_SENT, 1)
            .await?;

        Ok(SentMessageDto {
            channel_id,
            message_id: message.id.get(),
        })
    }

    async fn require_feed(
        &self,
        repo: &FeedRepository<'_>,
        guild_id: u64,
        feed_id: i32,
    ) -> Result<FeedParam, AppError> {
        repo.find_in_guild(guild_id, feed_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feed not found".to_string()))
    }

    async fn require_guild_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        let owned = ChannelService::new(self.cache)
            .guild_has_channel(guild_id, channel_id)
            .await?;

        if !owned {
            return Err(AppError::BadRequest(
                "Channel does not belong to this guild".to_string(),
            ));
        }

        Ok(())
    }
}

/// Trims the title and checks its length.
fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    let length = title.chars().count();

    if length == 0 || length > MAX_TITLE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Title must be between 1 and {} characters",
            MAX_TITLE_LENGTH
        )));
    }

    Ok(title.to_string())
}

/// Accepts absolute http and https URLs only, returning the trimmed URL.
fn validate_url(url: &str) -> Result<String, AppError> {
    let url = url.trim();
    let parsed = Url::parse(url)
        .map_err(|e| AppError::BadRequest(format!("Invalid feed URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(url.to_string()),
        _ => Err(AppError::BadRequest(
            "Feed URL must use http or https".to_string(),
        )),
    }
}

/// Blank formats become `None`; formats longer than a Discord message are rejected.
fn normalize_text(text: Option<String>) -> Result<Option<String>, AppError> {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };

    if text.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Message format must be at most {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }

    Ok(Some(text))
}

/// Replaces `{name}` placeholders with article values.
///
/// Unknown placeholders are kept verbatim. The result is cut to the Discord
/// message limit.
fn render_article(format: Option<&str>, article: &HashMap<String, String>) -> String {
    let format = format.unwrap_or(DEFAULT_FORMAT);
    let mut rendered = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replaced = after.find('}').and_then(|end| {
            let name = &after[..end];
            article.get(name).map(|value| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                rendered.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }
    rendered.push_str(rest);

    rendered.chars().take(MAX_MESSAGE_LENGTH).collect()
}
