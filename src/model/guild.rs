use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Guild snapshot from the cache mirror merged with its bot profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub member_count: u64,
    pub profile: Option<GuildProfileDto>,
    /// Maximum number of feeds the guild may have
    pub limit: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildProfileDto {
    pub name: String,
    pub prefix: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
}

/// Partial profile update, only fields that are present are written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateGuildProfileDto {
    pub prefix: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChannelDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub guild_id: u64,
    pub name: String,
    pub kind: String,
    pub position: u16,
}
