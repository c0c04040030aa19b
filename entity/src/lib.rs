//! SeaORM entity models for the feed panel database.

pub mod prelude;

pub mod feed;
pub mod general_stats;
pub mod guild_profile;
pub mod web_cache;
