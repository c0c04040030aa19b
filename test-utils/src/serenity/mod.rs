//! Test factories for creating Serenity gateway objects.
//!
//! Objects are built by deserializing JSON shaped like Discord's gateway payloads,
//! so they pass through the same serde paths as real events.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_guild_with_channels};
//!
//! let general = create_test_channel(2, 1, "general", 0);
//! let guild = create_test_guild_with_channels(1, "Test Guild", vec![general]);
//! ```

pub mod channel;
pub mod guild;
pub mod user;

pub use channel::{create_test_channel, create_test_channel_of_kind};
pub use guild::{create_test_guild, create_test_guild_with_channels};
pub use user::{create_test_bot_user, create_test_user};
