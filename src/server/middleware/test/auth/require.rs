use super::*;

/// Tests an empty session.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), MemoryCache::shared());

    let result = AuthGuard::new(&state, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a session holding an identity but no token.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_identity_without_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), MemoryCache::shared());
    AuthSession::new(session).set_identity(&identity(1)).await?;

    let result = AuthGuard::new(&state, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a session with a valid token.
///
/// Expected: Ok with the stored identity and token unchanged
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), MemoryCache::shared());
    let stored = token(far_future(), Some("refresh"));
    let auth_session = AuthSession::new(session);
    auth_session.set_identity(&identity(7)).await?;
    auth_session.set_token(&stored).await?;

    let user = AuthGuard::new(&state, session).require().await?;

    assert_eq!(user.identity.id, 7);
    assert_eq!(user.token, stored);

    Ok(())
}

/// Tests an expired token that cannot be refreshed.
///
/// Expected: Err(AuthError::NotLoggedIn) without contacting Discord
#[tokio::test]
async fn rejects_expired_token_without_refresh_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::for_test(db.clone(), MemoryCache::shared());
    let auth_session = AuthSession::new(session);
    auth_session.set_identity(&identity(7)).await?;
    auth_session.set_token(&token(0, None)).await?;

    let result = AuthGuard::new(&state, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}
