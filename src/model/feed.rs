use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FeedDto {
    pub id: i32,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub guild_id: u64,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel_id: u64,
    pub title: String,
    pub url: String,
    pub text: Option<String>,
    pub check_titles: bool,
    pub image_previews: bool,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateFeedDto {
    pub title: String,
    pub url: String,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel_id: u64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub check_titles: bool,
    #[serde(default = "default_image_previews")]
    pub image_previews: bool,
}

fn default_image_previews() -> bool {
    true
}

/// Partial feed update, absent fields are left untouched.
///
/// An empty `text` resets the feed to the default message format.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateFeedDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, with = "crate::model::snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub channel_id: Option<u64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub check_titles: Option<bool>,
    #[serde(default)]
    pub image_previews: Option<bool>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

/// Article placeholders to render with the feed's message format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SendArticleDto {
    pub article: HashMap<String, String>,
    /// Target channel, defaults to the feed's channel
    #[serde(default, with = "crate::model::snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub channel_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SentMessageDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel_id: u64,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub message_id: u64,
}
