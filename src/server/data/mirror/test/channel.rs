use super::*;

/// Tests listing the channels of a guild.
///
/// Verifies channels of other guilds are not included.
///
/// Expected: Ok with only the guild's channels
#[tokio::test]
async fn lists_guild_channels() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = ChannelMirror::new(&cache);

    mirror.recognize(&cached_channel(10, 1, "general")).await?;
    mirror.recognize(&cached_channel(11, 1, "news")).await?;
    mirror.recognize(&cached_channel(20, 2, "elsewhere")).await?;

    let mut ids: Vec<u64> = mirror
        .get_guild_channels(1)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![10, 11]);

    Ok(())
}

/// Tests channel ownership checks.
///
/// Expected: true only for a mirrored channel of the same guild
#[tokio::test]
async fn checks_guild_has_channel() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = ChannelMirror::new(&cache);

    mirror.recognize(&cached_channel(10, 1, "general")).await?;

    assert!(mirror.guild_has_channel(1, 10).await?);
    assert!(!mirror.guild_has_channel(2, 10).await?);
    assert!(!mirror.guild_has_channel(1, 99).await?);

    Ok(())
}

/// Tests forgetting a single channel.
///
/// Expected: Ok with channel removed from the guild's set
#[tokio::test]
async fn forget_removes_channel_from_guild() -> Result<(), CacheError> {
    let cache = MemoryCache::new();
    let mirror = ChannelMirror::new(&cache);

    mirror.recognize(&cached_channel(10, 1, "general")).await?;
    mirror.recognize(&cached_channel(11, 1, "news")).await?;

    mirror.forget(10).await?;

    let remaining: Vec<u64> = mirror
        .get_guild_channels(1)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(remaining, vec![11]);

    Ok(())
}
