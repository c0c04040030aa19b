//! Snapshots of Discord entities stored in the cache mirror.

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelType, Guild, GuildChannel, PartialGuild, User};

use crate::model::{guild::ChannelDto, user::BotUserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedGuild {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub owner_id: u64,
    pub member_count: u64,
    /// Shard that recognized the guild
    pub shard_id: u32,
}

impl CachedGuild {
    pub fn from_guild(guild: &Guild, shard_id: u32) -> Self {
        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            icon: guild.icon.as_ref().map(ToString::to_string),
            owner_id: guild.owner_id.get(),
            member_count: guild.member_count,
            shard_id,
        }
    }

    /// Applies a guild update event, keeping fields the event does not carry.
    pub fn apply_update(&mut self, guild: &PartialGuild) {
        self.name = guild.name.clone();
        self.icon = guild.icon.as_ref().map(ToString::to_string);
        self.owner_id = guild.owner_id.get();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedChannel {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    /// `text` or `news`
    pub kind: String,
    pub position: u16,
}

impl CachedChannel {
    /// Snapshots a channel articles can be posted to.
    ///
    /// # Returns
    /// - `Some(CachedChannel)` - Text or announcement channel
    /// - `None` - Any other channel type
    pub fn from_channel(channel: &GuildChannel) -> Option<Self> {
        let kind = match channel.kind {
            ChannelType::Text => "text",
            ChannelType::News => "news",
            _ => return None,
        };

        Some(Self {
            id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
            kind: kind.to_string(),
            position: channel.position,
        })
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            guild_id: self.guild_id,
            name: self.name,
            kind: self.kind,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    pub id: u64,
    pub username: String,
    pub discriminator: Option<u16>,
    pub avatar: Option<String>,
    pub bot: bool,
}

impl CachedUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name.clone(),
            discriminator: user.discriminator.map(|d| d.get()),
            avatar: user.avatar.as_ref().map(ToString::to_string),
            bot: user.bot,
        }
    }

    pub fn into_bot_dto(self) -> BotUserDto {
        BotUserDto {
            id: self.id,
            username: self.username,
            avatar: self.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_channel, create_test_channel_of_kind, create_test_guild,
    };

    /// Tests that only postable channels are mirrored.
    ///
    /// Expected: text and news kept, voice and category dropped
    #[test]
    fn mirrors_only_postable_channels() {
        let text = create_test_channel(10, 1, "general", 0);
        let news = create_test_channel_of_kind(11, 1, "announcements", 1, 5);
        let voice = create_test_channel_of_kind(12, 1, "Lounge", 2, 2);
        let category = create_test_channel_of_kind(13, 1, "Info", 3, 4);

        assert_eq!(CachedChannel::from_channel(&text).map(|c| c.kind), Some("text".to_string()));
        assert_eq!(CachedChannel::from_channel(&news).map(|c| c.kind), Some("news".to_string()));
        assert!(CachedChannel::from_channel(&voice).is_none());
        assert!(CachedChannel::from_channel(&category).is_none());
    }

    /// Tests the guild snapshot fields.
    ///
    /// Expected: id, name, icon, member count and shard copied
    #[test]
    fn snapshots_guild() {
        let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));

        let cached = CachedGuild::from_guild(&guild, 2);

        assert_eq!(cached.id, 123456789);
        assert_eq!(cached.name, "Test Guild");
        assert_eq!(cached.icon, Some("abc12300000000000000000000000000".to_string()));
        assert_eq!(cached.owner_id, 100000000000000000);
        assert_eq!(cached.member_count, 100);
        assert_eq!(cached.shard_id, 2);
    }
}
