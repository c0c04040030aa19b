//! Ready handlers that populate the cache mirror for a shard.
//!
//! `ready` lists the shard's guilds as unavailable; their data arrives through
//! `guild_create` and serenity fires `cache_ready` once all of them are in its
//! cache. At that point the shard drops what it mirrored before, mirrors its
//! current guilds and members and reports `complete` to the shard manager. A
//! shard without guilds completes straight from `ready`.

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, GuildId, Ready};

use crate::server::{
    bot::{handler::Handler, shard::ShardSignal},
    cache::CacheStore,
    service::mirror::MirrorService,
};

/// Handles the ready event when the shard connects to Discord.
///
/// Mirrors the bot user so `/api/users/@bot` works as soon as possible.
pub async fn handle_ready(handler: &Handler, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord on shard {}",
        ready.user.name,
        handler.signal.shard_id()
    );

    let mirror = MirrorService::new(handler.cache.as_ref());
    if let Err(e) = mirror.recognize_user(&ready.user).await {
        tracing::error!("Failed to mirror bot user: {}", e);
    }

    if ready.guilds.is_empty() {
        populate_shard(
            handler.cache.as_ref(),
            &handler.signal,
            &handler.completed,
            &[],
        )
        .await;
    }
}

/// Handles cache_ready once every guild of the shard is cached.
pub async fn handle_cache_ready(handler: &Handler, ctx: Context, guild_ids: Vec<GuildId>) {
    let guilds: Vec<Guild> = guild_ids
        .iter()
        .filter_map(|guild_id| ctx.cache.guild(*guild_id).map(|guild| (*guild).clone()))
        .collect();

    tracing::debug!(
        "Shard {} cache ready with {} guilds",
        handler.signal.shard_id(),
        guilds.len()
    );

    populate_shard(
        handler.cache.as_ref(),
        &handler.signal,
        &handler.completed,
        &guilds,
    )
    .await;
}

/// Replaces the shard's mirrored guilds and reports `complete` the first time.
///
/// A failure is fatal for the shard: it reports `exit` instead.
pub async fn populate_shard(
    cache: &dyn CacheStore,
    signal: &ShardSignal,
    completed: &AtomicBool,
    guilds: &[Guild],
) {
    let shard_id = signal.shard_id();

    if let Err(e) = MirrorService::new(cache)
        .repopulate_shard(shard_id, guilds)
        .await
    {
        tracing::error!("Failed to populate cache mirror for shard {}: {}", shard_id, e);
        signal.exit();
        return;
    }

    if !completed.swap(true, Ordering::SeqCst) {
        signal.complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::shard::ShardEvent, cache::memory::MemoryCache, data::mirror::GuildMirror,
    };
    use test_utils::serenity::create_test_guild;

    /// Tests populating a shard twice, as after a reconnect.
    ///
    /// Expected: latest guilds mirrored and complete reported exactly once
    #[tokio::test]
    async fn populates_and_completes_once() {
        let (signal, mut events) = ShardSignal::for_test(0);
        let cache = MemoryCache::new();
        let completed = AtomicBool::new(false);
        let guilds = vec![create_test_guild(1, "One", None), create_test_guild(2, "Two", None)];

        populate_shard(&cache, &signal, &completed, &guilds).await;
        populate_shard(&cache, &signal, &completed, &guilds[..1]).await;
        drop(signal);

        assert_eq!(GuildMirror::new(&cache).count().await.unwrap(), 1);
        assert_eq!(events.recv().await, Some(ShardEvent::Complete(0)));
        assert_eq!(events.recv().await, None);
    }

    /// Tests a shard without guilds.
    ///
    /// Expected: complete reported and nothing mirrored
    #[tokio::test]
    async fn completes_without_guilds() {
        let (signal, mut events) = ShardSignal::for_test(3);
        let cache = MemoryCache::new();
        let completed = AtomicBool::new(false);

        populate_shard(&cache, &signal, &completed, &[]).await;

        assert_eq!(events.recv().await, Some(ShardEvent::Complete(3)));
        assert_eq!(GuildMirror::new(&cache).count().await.unwrap(), 0);
    }
}
