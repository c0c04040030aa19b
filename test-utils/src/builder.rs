use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Feed)
///     .with_table(GuildProfile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The statement is generated from the SeaORM entity using SQLite syntax and
    /// executed when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table used by the guild feed endpoints.
    ///
    /// Includes `Feed`, `GuildProfile` and `GeneralStats`.
    pub fn with_feed_tables(self) -> Self {
        self.with_table(Feed)
            .with_table(GuildProfile)
            .with_table(GeneralStats)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
