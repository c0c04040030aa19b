use std::sync::atomic::AtomicBool;

use serenity::all::{
    Context, CurrentUser, EventHandler, Guild, GuildChannel, GuildId, GuildMemberUpdateEvent,
    Member, Message, PartialGuild, Ready, UnavailableGuild,
};
use serenity::async_trait;

use crate::server::{bot::shard::ShardSignal, cache::Cache};

pub mod channel;
pub mod guild;
pub mod member;
pub mod ready;

/// Per-shard event handler keeping the cache mirror current.
pub struct Handler {
    pub cache: Cache,
    pub signal: ShardSignal,
    /// Set once the shard reported `complete` to the manager
    pub completed: AtomicBool,
}

impl Handler {
    pub fn new(cache: Cache, signal: ShardSignal) -> Self {
        Self {
            cache,
            signal,
            completed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the shard is connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called once every guild announced in `ready` has been received
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(self, ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self, ctx, guild, is_new).await;
    }

    async fn guild_update(&self, ctx: Context, old: Option<Guild>, new: PartialGuild) {
        guild::handle_guild_update(self, ctx, old, new).await;
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(self, ctx, incomplete, full).await;
    }

    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(self, ctx, channel).await;
    }

    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(self, ctx, old, new).await;
    }

    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(self, ctx, channel, messages).await;
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self, ctx, new_member).await;
    }

    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(self, ctx, old, new, event).await;
    }

    /// Called when the bot user itself changes
    async fn user_update(&self, ctx: Context, old: Option<CurrentUser>, new: CurrentUser) {
        member::handle_user_update(self, ctx, old, new).await;
    }
}
