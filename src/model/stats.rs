use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatsDto {
    pub guilds: u64,
    /// Number of distinct feed URLs across all guilds
    pub feeds: u64,
    pub articles_delivered: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BotConfigDto {
    pub default_feed_limit: u64,
    pub invite_url: String,
}
