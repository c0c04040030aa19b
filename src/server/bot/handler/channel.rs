use dioxus_logger::tracing;
use serenity::all::{Context, GuildChannel, Message};

use crate::server::{bot::handler::Handler, service::mirror::MirrorService};

pub async fn handle_channel_create(handler: &Handler, _ctx: Context, channel: GuildChannel) {
    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .recognize_channel(&channel)
        .await
    {
        tracing::error!("Failed to mirror channel {}: {}", channel.id, e);
    }
}

/// A channel whose type changed to one that cannot receive articles is forgotten.
pub async fn handle_channel_update(
    handler: &Handler,
    _ctx: Context,
    _old: Option<GuildChannel>,
    new: GuildChannel,
) {
    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .recognize_channel(&new)
        .await
    {
        tracing::error!("Failed to update mirrored channel {}: {}", new.id, e);
    }
}

pub async fn handle_channel_delete(
    handler: &Handler,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .forget_channel(channel.id.get())
        .await
    {
        tracing::error!("Failed to forget channel {}: {}", channel.id, e);
    }
}
