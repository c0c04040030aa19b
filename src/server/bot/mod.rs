//! Discord gateway side of the panel.
//!
//! The bot does not answer commands. Its shards only keep the cache mirror of
//! guilds, channels and users current, which the HTTP API reads to check guild
//! access and list channels.
//!
//! # Startup
//!
//! `shard::start_shards` flushes the mirror and spawns one tokio task per shard.
//! Shards are initialized one at a time (see `handshake`), and the HTTP server
//! starts only once every shard has populated the mirror.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel create, update and delete events
//! - `GUILD_MEMBERS` - Member events and member lists (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod handshake;
pub mod shard;
