//! Web cache factory for creating cached Discord API responses.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating web cache rows.
///
/// Entries expire ten minutes from now unless `expires_at` is overridden.
pub struct WebCacheFactory<'a> {
    db: &'a DatabaseConnection,
    key: String,
    kind: String,
    data: String,
    expires_at: DateTime<Utc>,
}

impl<'a> WebCacheFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
            kind: kind.into(),
            data: "{}".to_string(),
            expires_at: Utc::now() + Duration::minutes(10),
        }
    }

    /// Sets the raw JSON payload.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Marks the entry as already expired.
    pub fn expired(self) -> Self {
        self.expires_at(Utc::now() - Duration::minutes(1))
    }

    pub async fn build(self) -> Result<entity::web_cache::Model, DbErr> {
        entity::web_cache::ActiveModel {
            key: ActiveValue::Set(self.key),
            kind: ActiveValue::Set(self.kind),
            data: ActiveValue::Set(self.data),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-expired web cache entry with the given payload.
pub async fn create_web_cache_entry(
    db: &DatabaseConnection,
    key: impl Into<String>,
    kind: impl Into<String>,
    data: impl Into<String>,
) -> Result<entity::web_cache::Model, DbErr> {
    WebCacheFactory::new(db, key, kind).data(data).build().await
}
