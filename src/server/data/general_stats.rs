use migration::{Expr, OnConflict};
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, ExprTrait};

/// Key of the counter incremented for every article sent from the panel.
pub const ARTICLES_SENT: &str = "articles_sent";

pub struct GeneralStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeneralStatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a counter, `0` when it was never written.
    pub async fn get(&self, key: &str) -> Result<i64, DbErr> {
        Ok(entity::prelude::GeneralStats::find_by_id(key.to_string())
            .one(self.db)
            .await?
            .map(|stat| stat.value)
            .unwrap_or(0))
    }

    /// Atomically adds `by` to a counter, creating it when missing.
    pub async fn increment(&self, key: &str, by: i64) -> Result<(), DbErr> {
        entity::prelude::GeneralStats::insert(entity::general_stats::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(by),
        })
        .on_conflict(
            OnConflict::column(entity::general_stats::Column::Key)
                .value(
                    entity::general_stats::Column::Value,
                    Expr::col((
                        entity::prelude::GeneralStats,
                        entity::general_stats::Column::Value,
                    ))
                    .add(by),
                )
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
