//! Feed Panel Test Utils
//!
//! Shared testing utilities for the control panel backend. Provides a builder for
//! in-memory SQLite test contexts, factories for persisted rows and factories for
//! Serenity gateway objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Feed;
//!
//! #[tokio::test]
//! async fn lists_feeds() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Feed)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
