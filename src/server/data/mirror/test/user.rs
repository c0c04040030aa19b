use super::*;

/// Tests recognizing and fetching a user.
///
/// Expected: Ok with the stored snapshot
#[tokio::test]
async fn recognizes_user() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = UserMirror::new(&cache);
    let user = CachedUser {
        id: 42,
        username: "feedbot".to_string(),
        discriminator: None,
        avatar: None,
        bot: true,
    };

    mirror.recognize(&user).await?;

    assert_eq!(mirror.fetch(42).await?, Some(user));
    assert_eq!(mirror.fetch(43).await?, None);

    Ok(())
}
