use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebCache::Table)
                    .if_not_exists()
                    .col(string(WebCache::Key))
                    .col(string(WebCache::Kind))
                    .col(text(WebCache::Data))
                    .col(timestamp_with_time_zone(WebCache::ExpiresAt))
                    .primary_key(Index::create().col(WebCache::Key).col(WebCache::Kind))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WebCache {
    Table,
    Key,
    Kind,
    Data,
    ExpiresAt,
}
