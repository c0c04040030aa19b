use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeneralStats::Table)
                    .if_not_exists()
                    .col(string(GeneralStats::Key).primary_key())
                    .col(big_integer(GeneralStats::Value).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeneralStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GeneralStats {
    Table,
    Key,
    Value,
}
