//! Member and user event handlers.
//!
//! Users are only ever added or refreshed in the mirror, never removed.

use dioxus_logger::tracing;
use serenity::all::{Context, CurrentUser, GuildMemberUpdateEvent, Member, User};

use crate::server::{bot::handler::Handler, service::mirror::MirrorService};

pub async fn handle_guild_member_addition(handler: &Handler, _ctx: Context, new_member: Member) {
    recognize(handler, &new_member.user).await;
}

pub async fn handle_guild_member_update(
    handler: &Handler,
    _ctx: Context,
    _old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    recognize(handler, &event.user).await;
}

pub async fn handle_user_update(
    handler: &Handler,
    _ctx: Context,
    _old: Option<CurrentUser>,
    new: CurrentUser,
) {
    recognize(handler, &new).await;
}

async fn recognize(handler: &Handler, user: &User) {
    if let Err(e) = MirrorService::new(handler.cache.as_ref())
        .recognize_user(user)
        .await
    {
        tracing::error!("Failed to mirror user {}: {}", user.id, e);
    }
}
