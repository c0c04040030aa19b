//! Parameter models for guild profile operations.

use sea_orm::DbErr;

use crate::model::guild::{GuildProfileDto, UpdateGuildProfileDto};

/// Per-guild bot settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildProfileParam {
    pub guild_id: u64,
    /// Guild name at the time the profile was last written
    pub name: String,
    pub prefix: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
}

impl GuildProfileParam {
    pub fn from_entity(entity: entity::guild_profile::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            name: entity.name,
            prefix: entity.prefix,
            locale: entity.locale,
            timezone: entity.timezone,
            date_format: entity.date_format,
        })
    }

    pub fn into_dto(self) -> GuildProfileDto {
        GuildProfileDto {
            name: self.name,
            prefix: self.prefix,
            locale: self.locale,
            timezone: self.timezone,
            date_format: self.date_format,
        }
    }
}

/// Create-or-update request for a guild profile.
///
/// Fields left `None` keep their stored value when the profile exists.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuildProfileParam {
    pub guild_id: u64,
    pub name: String,
    pub prefix: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
}

impl UpdateGuildProfileParam {
    pub fn from_dto(guild_id: u64, name: String, dto: UpdateGuildProfileDto) -> Self {
        Self {
            guild_id,
            name,
            prefix: dto.prefix,
            locale: dto.locale,
            timezone: dto.timezone,
            date_format: dto.date_format,
        }
    }
}
