use super::*;
use crate::server::{
    cache::Cache, data::mirror::GuildMirror, model::mirror::CachedGuild,
};
use std::sync::Arc;
use test_utils::factory::create_web_cache_entry;

const USER_ID: u64 = 7;
const GUILD_ID: u64 = 500;

/// Builds a logged in state whose guild list is already in the web cache.
async fn logged_in(
    session: &tower_sessions::Session,
    db: &sea_orm::DatabaseConnection,
    guilds_json: &str,
) -> Result<(), AppError> {
    let auth_session = AuthSession::new(session);
    auth_session.set_identity(&identity(USER_ID)).await?;
    auth_session
        .set_token(&token(far_future(), Some("refresh")))
        .await?;

    create_web_cache_entry(db, USER_ID.to_string(), "guilds", guilds_json).await?;

    Ok(())
}

async fn mirrored_cache() -> Result<Cache, AppError> {
    let cache = Arc::new(MemoryCache::new());
    GuildMirror::new(cache.as_ref())
        .recognize(&CachedGuild {
            id: GUILD_ID,
            name: "Feeds".to_string(),
            icon: None,
            owner_id: USER_ID,
            member_count: 3,
            shard_id: 0,
        })
        .await?;
    Ok(cache)
}

/// Tests a guild the user owns and the bot is in.
///
/// Expected: Ok with the mirrored guild
#[tokio::test]
async fn grants_owner_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::WebCache)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), mirrored_cache().await?);
    logged_in(
        session,
        db,
        r#"[{"id":"500","name":"Feeds","icon":null,"owner":true,"permissions":"0"}]"#,
    )
    .await?;

    let (user, guild) = AuthGuard::new(&state, session)
        .require_guild(GUILD_ID)
        .await?;

    assert_eq!(user.identity.id, USER_ID);
    assert_eq!(guild.name, "Feeds");

    Ok(())
}

/// Tests a member without manage permissions.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn denies_member_without_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::WebCache)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), mirrored_cache().await?);
    logged_in(
        session,
        db,
        r#"[{"id":"500","name":"Feeds","icon":null,"owner":false,"permissions":"2048"}]"#,
    )
    .await?;

    let result = AuthGuard::new(&state, session).require_guild(GUILD_ID).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a guild the user is not a member of.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn denies_unknown_membership() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::WebCache)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), mirrored_cache().await?);
    logged_in(session, db, "[]").await?;

    let result = AuthGuard::new(&state, session).require_guild(GUILD_ID).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a manageable guild the bot has left.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn not_found_when_bot_absent() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::WebCache)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), MemoryCache::shared());
    logged_in(
        session,
        db,
        r#"[{"id":"500","name":"Feeds","icon":null,"owner":false,"permissions":"8"}]"#,
    )
    .await?;

    let result = AuthGuard::new(&state, session).require_guild(GUILD_ID).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
