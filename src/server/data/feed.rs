use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::feed::{CreateFeedParam, FeedParam, UpdateFeedParam};

pub struct FeedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all feeds of a guild, oldest first.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<FeedParam>, DbErr> {
        entity::prelude::Feed::find()
            .filter(entity::feed::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::feed::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(FeedParam::from_entity)
            .collect()
    }

    /// Finds a feed only if it belongs to the given guild.
    ///
    /// # Returns
    /// - `Ok(Some(FeedParam))` - Feed exists in the guild
    /// - `Ok(None)` - No such feed, or it belongs to another guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_in_guild(
        &self,
        guild_id: u64,
        feed_id: i32,
    ) -> Result<Option<FeedParam>, DbErr> {
        entity::prelude::Feed::find_by_id(feed_id)
            .filter(entity::feed::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(FeedParam::from_entity)
            .transpose()
    }

    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Feed::find()
            .filter(entity::feed::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }

    /// Counts distinct feed URLs across all guilds.
    pub async fn count_distinct_urls(&self) -> Result<u64, DbErr> {
        entity::prelude::Feed::find()
            .select_only()
            .column(entity::feed::Column::Url)
            .distinct()
            .count(self.db)
            .await
    }

    pub async fn create(&self, param: CreateFeedParam) -> Result<FeedParam, DbErr> {
        let entity = entity::feed::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            title: ActiveValue::Set(param.title),
            url: ActiveValue::Set(param.url),
            text: ActiveValue::Set(param.text),
            check_titles: ActiveValue::Set(param.check_titles),
            image_previews: ActiveValue::Set(param.image_previews),
            disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FeedParam::from_entity(entity)
    }

    /// Applies a partial update to an existing feed.
    ///
    /// # Returns
    /// - `Ok(FeedParam)` - The updated feed
    /// - `Err(DbErr::RecordNotFound)` - Feed does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, feed_id: i32, param: UpdateFeedParam) -> Result<FeedParam, DbErr> {
        let feed = entity::prelude::Feed::find_by_id(feed_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Feed {} not found", feed_id)))?;

        let mut active: entity::feed::ActiveModel = feed.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(url) = param.url {
            active.url = ActiveValue::Set(url);
        }
        if let Some(channel_id) = param.channel_id {
            active.channel_id = ActiveValue::Set(channel_id.to_string());
        }
        if let Some(text) = param.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(check_titles) = param.check_titles {
            active.check_titles = ActiveValue::Set(check_titles);
        }
        if let Some(image_previews) = param.image_previews {
            active.image_previews = ActiveValue::Set(image_previews);
        }
        if let Some(disabled) = param.disabled {
            active.disabled = ActiveValue::Set(disabled);
        }

        FeedParam::from_entity(active.update(self.db).await?)
    }

    pub async fn delete(&self, feed_id: i32) -> Result<(), DbErr> {
        entity::prelude::Feed::delete_by_id(feed_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
