pub use super::feed::Entity as Feed;
pub use super::general_stats::Entity as GeneralStats;
pub use super::guild_profile::Entity as GuildProfile;
pub use super::web_cache::Entity as WebCache;
