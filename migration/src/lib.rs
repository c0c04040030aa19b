pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_feed_table;
mod m20260301_000002_create_guild_profile_table;
mod m20260301_000003_create_web_cache_table;
mod m20260301_000004_create_general_stats_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_feed_table::Migration),
            Box::new(m20260301_000002_create_guild_profile_table::Migration),
            Box::new(m20260301_000003_create_web_cache_table::Migration),
            Box::new(m20260301_000004_create_general_stats_table::Migration),
        ]
    }
}
