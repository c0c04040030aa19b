//! Discord REST payloads fetched with a user's OAuth2 access token.

use serde::{Deserialize, Serialize};
use serenity::all::Permissions;

use crate::model::user::{ManagedGuildDto, UserDto};

/// Identity returned by `GET /users/@me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordIdentity {
    #[serde(with = "crate::model::snowflake")]
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordIdentity {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            global_name: self.global_name,
            avatar: self.avatar,
        }
    }
}

/// Partial guild returned by `GET /users/@me/guilds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGuild {
    #[serde(with = "crate::model::snowflake")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// The user's computed permissions in the guild
    #[serde(with = "crate::model::snowflake")]
    pub permissions: u64,
}

impl UserGuild {
    /// Whether the user may configure feeds in this guild.
    ///
    /// Owners, administrators and members with Manage Channels qualify.
    pub fn can_manage(&self) -> bool {
        let permissions = Permissions::from_bits_truncate(self.permissions);

        self.owner
            || permissions.contains(Permissions::ADMINISTRATOR)
            || permissions.contains(Permissions::MANAGE_CHANNELS)
    }

    pub fn into_dto(self) -> ManagedGuildDto {
        ManagedGuildDto {
            id: self.id,
            name: self.name,
            icon: self.icon,
            owner: self.owner,
        }
    }
}
