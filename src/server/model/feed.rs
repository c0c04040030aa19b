//! Parameter models for feed operations.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::feed::{CreateFeedDto, FeedDto, UpdateFeedDto};

/// A feed row with parsed snowflakes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedParam {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub title: String,
    pub url: String,
    /// Custom message format, `None` uses the default format
    pub text: Option<String>,
    pub check_titles: bool,
    pub image_previews: bool,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl FeedParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FeedParam)` - Successfully converted
    /// - `Err(DbErr::Custom)` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::feed::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            title: entity.title,
            url: entity.url,
            text: entity.text,
            check_titles: entity.check_titles,
            image_previews: entity.image_previews,
            disabled: entity.disabled,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> FeedDto {
        FeedDto {
            id: self.id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            title: self.title,
            url: self.url,
            text: self.text,
            check_titles: self.check_titles,
            image_previews: self.image_previews,
            disabled: self.disabled,
            created_at: self.created_at,
        }
    }
}

fn parse_snowflake(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Parameters for creating a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFeedParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub title: String,
    pub url: String,
    pub text: Option<String>,
    pub check_titles: bool,
    pub image_previews: bool,
}

impl CreateFeedParam {
    pub fn from_dto(guild_id: u64, dto: CreateFeedDto) -> Self {
        Self {
            guild_id,
            channel_id: dto.channel_id,
            title: dto.title,
            url: dto.url,
            text: dto.text,
            check_titles: dto.check_titles,
            image_previews: dto.image_previews,
        }
    }
}

/// Parameters for a partial feed update.
///
/// `text` is doubly optional: `None` leaves the format untouched while
/// `Some(None)` resets it to the default format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateFeedParam {
    pub title: Option<String>,
    pub url: Option<String>,
    pub channel_id: Option<u64>,
    pub text: Option<Option<String>>,
    pub check_titles: Option<bool>,
    pub image_previews: Option<bool>,
    pub disabled: Option<bool>,
}

impl UpdateFeedParam {
    pub fn from_dto(dto: UpdateFeedDto) -> Self {
        Self {
            title: dto.title,
            url: dto.url,
            channel_id: dto.channel_id,
            text: dto
                .text
                .map(|text| Some(text).filter(|t| !t.trim().is_empty())),
            check_titles: dto.check_titles,
            image_previews: dto.image_previews,
            disabled: dto.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that an empty text resets the message format.
    ///
    /// Expected: Some(None) for blank text, None when absent
    #[test]
    fn blank_text_resets_format() {
        let reset = UpdateFeedParam::from_dto(UpdateFeedDto {
            text: Some("   ".to_string()),
            ..Default::default()
        });
        let untouched = UpdateFeedParam::from_dto(UpdateFeedDto::default());

        assert_eq!(reset.text, Some(None));
        assert_eq!(untouched.text, None);
    }
}
