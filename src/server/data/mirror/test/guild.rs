use super::*;

/// Tests recognizing a guild.
///
/// Verifies the snapshot is stored and the guild is counted and
/// registered with its shard.
///
/// Expected: Ok with guild fetchable and counted
#[tokio::test]
async fn recognizes_guild() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = GuildMirror::new(&cache);

    mirror.recognize(&cached_guild(1, 0)).await?;

    assert_eq!(mirror.fetch(1).await?, Some(cached_guild(1, 0)));
    assert!(mirror.exists(1).await?);
    assert_eq!(mirror.count().await?, 1);

    Ok(())
}

/// Tests recognizing the same guild twice.
///
/// Expected: Ok with snapshot replaced and count unchanged
#[tokio::test]
async fn recognize_overwrites_snapshot() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = GuildMirror::new(&cache);

    mirror.recognize(&cached_guild(1, 0)).await?;
    let mut renamed = cached_guild(1, 0);
    renamed.name = "Renamed".to_string();
    mirror.recognize(&renamed).await?;

    assert_eq!(mirror.fetch(1).await?.map(|g| g.name), Some("Renamed".to_string()));
    assert_eq!(mirror.count().await?, 1);

    Ok(())
}

/// Tests forgetting a guild.
///
/// Verifies the guild snapshot and its channels are removed.
///
/// Expected: Ok with nothing left for the guild
#[tokio::test]
async fn forget_removes_guild_and_channels() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let guilds = GuildMirror::new(&cache);
    let channels = ChannelMirror::new(&cache);

    guilds.recognize(&cached_guild(1, 0)).await?;
    channels.recognize(&cached_channel(10, 1, "general")).await?;

    guilds.forget(1).await?;

    assert_eq!(guilds.fetch(1).await?, None);
    assert_eq!(guilds.count().await?, 0);
    assert_eq!(channels.fetch(10).await?, None);
    assert!(channels.get_guild_channels(1).await?.is_empty());

    Ok(())
}

/// Tests that a shard only forgets its own guilds.
///
/// Verifies that shard 0 repopulating does not wipe guilds
/// recognized by shard 1.
///
/// Expected: Ok with shard 1 guilds kept
#[tokio::test]
async fn forget_shard_keeps_other_shards() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = GuildMirror::new(&cache);

    mirror.recognize(&cached_guild(1, 0)).await?;
    mirror.recognize(&cached_guild(2, 0)).await?;
    mirror.recognize(&cached_guild(3, 1)).await?;

    let forgotten = mirror.forget_shard(0).await?;

    assert_eq!(forgotten, 2);
    assert_eq!(mirror.fetch(1).await?, None);
    assert_eq!(mirror.fetch(2).await?, None);
    assert!(mirror.exists(3).await?);
    assert_eq!(mirror.count().await?, 1);

    Ok(())
}

/// Tests fetching a guild that was never recognized.
///
/// Expected: Ok(None)
#[tokio::test]
async fn fetch_unknown_guild_returns_none() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = GuildMirror::new(&cache);

    assert_eq!(mirror.fetch(404).await?, None);
    assert!(!mirror.exists(404).await?);

    Ok(())
}
