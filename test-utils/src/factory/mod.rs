//! Factory methods for creating test rows.
//!
//! Each table has a `Factory` builder for customization and a `create_*` shorthand
//! for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let feed = factory::feed::FeedFactory::new(&db, "111")
//!     .channel_id("222")
//!     .title("Release notes")
//!     .build()
//!     .await?;
//!
//! let profile = factory::create_guild_profile(&db, "111").await?;
//! ```

pub mod feed;
pub mod guild_profile;
pub mod helpers;
pub mod web_cache;

pub use feed::create_feed;
pub use guild_profile::create_guild_profile;
pub use web_cache::create_web_cache_entry;
