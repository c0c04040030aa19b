use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildProfile::Table)
                    .if_not_exists()
                    .col(string(GuildProfile::GuildId).primary_key())
                    .col(string(GuildProfile::Name))
                    .col(string_null(GuildProfile::Prefix))
                    .col(string_null(GuildProfile::Locale))
                    .col(string_null(GuildProfile::Timezone))
                    .col(string_null(GuildProfile::DateFormat))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildProfile {
    Table,
    GuildId,
    Name,
    Prefix,
    Locale,
    Timezone,
    DateFormat,
}
