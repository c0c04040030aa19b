use crate::server::{
    cache::memory::MemoryCache,
    data::mirror::{ChannelMirror, GuildMirror, UserMirror},
    error::cache::CacheError,
    model::mirror::{CachedChannel, CachedGuild, CachedUser},
};

mod channel;
mod guild;
mod user;

fn cached_guild(id: u64, shard_id: u32) -> CachedGuild {
    CachedGuild {
        id,
        name: format!("Guild {}", id),
        icon: None,
        owner_id: 1,
        member_count: 10,
        shard_id,
    }
}

fn cached_channel(id: u64, guild_id: u64, name: &str) -> CachedChannel {
    CachedChannel {
        id,
        guild_id,
        name: name.to_string(),
        kind: "text".to_string(),
        position: 0,
    }
}
