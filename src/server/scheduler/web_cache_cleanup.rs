use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{data::web_cache::WebCacheRepository, error::AppError};

/// Starts the cleanup scheduler
///
/// Runs every ten minutes and deletes expired web cache rows and expired
/// sessions.
///
/// # Arguments
/// - `db`: Database connection
/// - `session_store`: Session store sharing the same database
pub async fn start_scheduler(
    db: DatabaseConnection,
    session_store: SqliteStore,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let session_store = session_store.clone();

        Box::pin(async move {
            if let Err(e) = clean_expired(&db, &session_store).await {
                tracing::error!("Error cleaning expired web cache and sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Web cache cleanup scheduler started");

    Ok(())
}

/// Deletes expired web cache rows, then expired sessions.
async fn clean_expired(db: &DatabaseConnection, session_store: &SqliteStore) -> Result<(), AppError> {
    let removed = WebCacheRepository::new(db)
        .delete_expired(Utc::now())
        .await?;
    if removed > 0 {
        tracing::debug!("Removed {} expired web cache entries", removed);
    }

    session_store.delete_expired().await?;

    Ok(())
}
