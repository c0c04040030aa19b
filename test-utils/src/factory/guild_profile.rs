//! Guild profile factory for creating test profile rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild profiles.
///
/// # Example
///
/// ```rust,ignore
/// let profile = GuildProfileFactory::new(&db, "123456789")
///     .prefix(Some("rss.".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildProfileFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    prefix: Option<String>,
    locale: Option<String>,
    timezone: Option<String>,
    date_format: Option<String>,
}

impl<'a> GuildProfileFactory<'a> {
    /// Creates a new factory named `"Guild {id}"` with no overrides set.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            name: format!("Guild {}", next_id()),
            prefix: None,
            locale: None,
            timezone: None,
            date_format: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn date_format(mut self, date_format: Option<String>) -> Self {
        self.date_format = date_format;
        self
    }

    pub async fn build(self) -> Result<entity::guild_profile::Model, DbErr> {
        entity::guild_profile::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            prefix: ActiveValue::Set(self.prefix),
            locale: ActiveValue::Set(self.locale),
            timezone: ActiveValue::Set(self.timezone),
            date_format: ActiveValue::Set(self.date_format),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild profile with default values.
pub async fn create_guild_profile(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_profile::Model, DbErr> {
    GuildProfileFactory::new(db, guild_id).build().await
}
