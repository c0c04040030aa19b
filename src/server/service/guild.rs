//! Guild service for business logic.
//!
//! Merges the mirrored guild snapshot with its stored profile and validates
//! profile updates before they are written.

use sea_orm::DatabaseConnection;

use crate::{
    model::guild::{GuildDto, UpdateGuildProfileDto},
    server::{
        cache::CacheStore,
        data::{guild_profile::GuildProfileRepository, mirror::GuildMirror},
        error::AppError,
        model::profile::{GuildProfileParam, UpdateGuildProfileParam},
    },
};

const MAX_PREFIX_LENGTH: usize = 10;
const MAX_SETTING_LENGTH: usize = 64;

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn CacheStore,
    feed_limit: u64,
}

impl<'a> GuildService<'a> {
    /// Creates a new GuildService instance.
    ///
    /// # Arguments
    /// - `db` - Database holding guild profiles
    /// - `cache` - Cache store holding the Discord mirror
    /// - `feed_limit` - Feed limit reported for every guild
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore, feed_limit: u64) -> Self {
        Self {
            db,
            cache,
            feed_limit,
        }
    }

    /// Gets the mirrored guild merged with its profile.
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - Guild with its profile, `profile` is `None` when never configured
    /// - `Err(AppError::NotFound)` - Guild is not in the cache mirror
    /// - `Err(AppError)` - Cache or database failure
    pub async fn get_guild(&self, guild_id: u64) -> Result<GuildDto, AppError> {
        let guild = GuildMirror::new(self.cache)
            .fetch(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))?;

        let profile = GuildProfileRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(GuildDto {
            id: guild.id,
            name: guild.name,
            icon: guild.icon,
            member_count: guild.member_count,
            profile: profile.map(GuildProfileParam::into_dto),
            limit: self.feed_limit,
        })
    }

    /// Creates or updates the guild's profile.
    ///
    /// The stored name is refreshed from the mirror on every write.
    ///
    /// # Returns
    /// - `Ok(GuildProfileParam)` - Profile after the write
    /// - `Err(AppError::BadRequest)` - A setting is empty or too long
    /// - `Err(AppError::NotFound)` - Guild is not in the cache mirror
    pub async fn update_profile(
        &self,
        guild_id: u64,
        dto: UpdateGuildProfileDto,
    ) -> Result<GuildProfileParam, AppError> {
        validate_profile(&dto)?;

        let guild = GuildMirror::new(self.cache)
            .fetch(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild not found".to_string()))?;

        let param = UpdateGuildProfileParam::from_dto(guild_id, guild.name, dto);
        let profile = GuildProfileRepository::new(self.db).upsert(param).await?;

        Ok(profile)
    }
}

fn validate_profile(dto: &UpdateGuildProfileDto) -> Result<(), AppError> {
    validate_setting("prefix", dto.prefix.as_deref(), MAX_PREFIX_LENGTH)?;
    validate_setting("locale", dto.locale.as_deref(), MAX_SETTING_LENGTH)?;
    validate_setting("timezone", dto.timezone.as_deref(), MAX_SETTING_LENGTH)?;
    validate_setting("date_format", dto.date_format.as_deref(), MAX_SETTING_LENGTH)
}

fn validate_setting(name: &str, value: Option<&str>, max_length: usize) -> Result<(), AppError> {
    let Some(value) = value else {
        return Ok(());
    };

    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} cannot be empty", name)));
    }
    if value.chars().count() > max_length {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            name, max_length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{cache::memory::MemoryCache, model::mirror::CachedGuild};
    use test_utils::{builder::TestBuilder, factory::create_guild_profile};

    async fn mirror_guild(cache: &MemoryCache, id: u64, name: &str) -> Result<(), AppError> {
        GuildMirror::new(cache)
            .recognize(&CachedGuild {
                id,
                name: name.to_string(),
                icon: None,
                owner_id: 1,
                member_count: 42,
                shard_id: 0,
            })
            .await?;
        Ok(())
    }

    /// Tests reading a guild that has never been configured.
    ///
    /// Expected: guild returned with no profile and the configured limit
    #[tokio::test]
    async fn get_guild_without_profile() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        mirror_guild(&cache, 1, "Guild").await?;

        let guild = GuildService::new(db, &cache, 5).get_guild(1).await?;

        assert_eq!(guild.name, "Guild");
        assert_eq!(guild.member_count, 42);
        assert!(guild.profile.is_none());
        assert_eq!(guild.limit, 5);

        Ok(())
    }

    /// Tests reading a configured guild.
    ///
    /// Expected: stored profile included
    #[tokio::test]
    async fn get_guild_with_profile() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        mirror_guild(&cache, 1, "Guild").await?;
        create_guild_profile(db, "1").await?;

        let guild = GuildService::new(db, &cache, 5).get_guild(1).await?;

        assert!(guild.profile.is_some());

        Ok(())
    }

    /// Tests reading a guild the bot is not in.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn get_unknown_guild() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();

        let result = GuildService::new(db, &cache, 5).get_guild(1).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests creating a profile through an update.
    ///
    /// Expected: profile created with the mirrored guild name
    #[tokio::test]
    async fn update_profile_creates_profile() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        mirror_guild(&cache, 1, "Mirrored Name").await?;

        let profile = GuildService::new(db, &cache, 5)
            .update_profile(
                1,
                UpdateGuildProfileDto {
                    prefix: Some("!".to_string()),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(profile.name, "Mirrored Name");
        assert_eq!(profile.prefix.as_deref(), Some("!"));

        Ok(())
    }

    /// Tests rejecting an oversized prefix.
    ///
    /// Expected: Err(BadRequest) and no profile written
    #[tokio::test]
    async fn update_profile_rejects_long_prefix() -> Result<(), AppError> {
        let test = TestBuilder::new().with_feed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        mirror_guild(&cache, 1, "Guild").await?;

        let result = GuildService::new(db, &cache, 5)
            .update_profile(
                1,
                UpdateGuildProfileDto {
                    prefix: Some("x".repeat(11)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(GuildProfileRepository::new(db)
            .find_by_guild_id(1)
            .await?
            .is_none());

        Ok(())
    }

    /// Tests setting validation.
    ///
    /// Expected: blank values rejected, absent values accepted
    #[test]
    fn validates_settings() {
        assert!(validate_setting("locale", None, 64).is_ok());
        assert!(validate_setting("locale", Some("en-US"), 64).is_ok());
        assert!(validate_setting("locale", Some("  "), 64).is_err());
    }
}
