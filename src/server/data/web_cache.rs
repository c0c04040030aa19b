use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::web_cache::WebCacheKind;

/// Short-lived copies of Discord API responses keyed by user ID.
pub struct WebCacheRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebCacheRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the cached payload if present and not yet expired.
    pub async fn get(
        &self,
        user_id: u64,
        kind: WebCacheKind,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, DbErr> {
        let entry = entity::prelude::WebCache::find_by_id((user_id.to_string(), kind.as_str().to_string()))
            .filter(entity::web_cache::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entry.map(|entry| entry.data))
    }

    pub async fn upsert(
        &self,
        user_id: u64,
        kind: WebCacheKind,
        data: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::WebCache::insert(entity::web_cache::ActiveModel {
            key: sea_orm::ActiveValue::Set(user_id.to_string()),
            kind: sea_orm::ActiveValue::Set(kind.as_str().to_string()),
            data: sea_orm::ActiveValue::Set(data),
            expires_at: sea_orm::ActiveValue::Set(expires_at),
        })
        .on_conflict(
            OnConflict::columns([
                entity::web_cache::Column::Key,
                entity::web_cache::Column::Kind,
            ])
            .update_columns([
                entity::web_cache::Column::Data,
                entity::web_cache::Column::ExpiresAt,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every cached payload of a user.
    pub async fn delete_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::WebCache::delete_many()
            .filter(entity::web_cache::Column::Key.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes entries that expired at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::WebCache::delete_many()
            .filter(entity::web_cache::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
