use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feed::Table)
                    .if_not_exists()
                    .col(pk_auto(Feed::Id))
                    .col(string(Feed::GuildId))
                    .col(string(Feed::ChannelId))
                    .col(string(Feed::Title))
                    .col(string(Feed::Url))
                    .col(text_null(Feed::Text))
                    .col(boolean(Feed::CheckTitles).default(false))
                    .col(boolean(Feed::ImagePreviews).default(true))
                    .col(boolean(Feed::Disabled).default(false))
                    .col(
                        timestamp_with_time_zone(Feed::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feed_guild_id")
                    .table(Feed::Table)
                    .col(Feed::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feed::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feed {
    Table,
    Id,
    GuildId,
    ChannelId,
    Title,
    Url,
    Text,
    CheckTitles,
    ImagePreviews,
    Disabled,
    CreatedAt,
}
