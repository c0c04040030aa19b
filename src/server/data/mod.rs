//! Repository layer for persisted and mirrored state.
//!
//! SQL repositories use SeaORM entity models internally and return parameter models
//! so entities never leak into the service layer. The `mirror` repositories do the
//! same for the key-value cache of Discord guilds, channels and users.

pub mod feed;
pub mod general_stats;
pub mod guild_profile;
pub mod mirror;
pub mod web_cache;

#[cfg(test)]
mod test;
