//! Guild event handlers for the cache mirror.
//!
//! `guild_create` fires on startup for every guild of the shard, when the bot
//! joins a guild and when a guild becomes available again after an outage.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, PartialGuild, UnavailableGuild};

use crate::server::{bot::handler::Handler, service::mirror::MirrorService};

/// Mirrors the guild with its channels and cached members.
pub async fn handle_guild_create(handler: &Handler, _ctx: Context, guild: Guild, is_new: Option<bool>) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild.id,
        is_new
    );

    let mirror = MirrorService::new(handler.cache.as_ref());

    if let Err(e) = mirror
        .recognize_guild(&guild, handler.signal.shard_id())
        .await
    {
        tracing::error!("Failed to mirror guild {}: {}", guild.id, e);
        return;
    }

    for member in guild.members.values() {
        if let Err(e) = mirror.recognize_user(&member.user).await {
            tracing::error!("Failed to mirror user {}: {}", member.user.id, e);
        }
    }
}

pub async fn handle_guild_update(
    handler: &Handler,
    _ctx: Context,
    _old: Option<Guild>,
    new: PartialGuild,
) {
    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .update_guild(&new)
        .await
    {
        tracing::error!("Failed to update mirrored guild {}: {}", new.id, e);
    }
}

/// Forgets the guild when the bot left it.
///
/// Guilds that only became unavailable stay mirrored until they return.
pub async fn handle_guild_delete(
    handler: &Handler,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::info!("Guild {} became unavailable", incomplete.id);
        return;
    }

    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .forget_guild(incomplete.id.get())
        .await
    {
        tracing::error!("Failed to forget guild {}: {}", incomplete.id, e);
    }
}
