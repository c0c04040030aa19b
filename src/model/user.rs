use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// The logged in Discord user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

impl UserDto {
    /// Name shown in the UI, preferring the global display name.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BotUserDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
}

impl BotUserDto {
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash))
    }
}

/// A guild the logged in user is allowed to manage feeds for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ManagedGuildDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub owner: bool,
}

impl ManagedGuildDto {
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the bot avatar URL with and without a custom avatar.
    ///
    /// Expected: CDN URL for a hash, None for the default avatar
    #[test]
    fn builds_bot_avatar_url() {
        let mut bot = BotUserDto {
            id: 42,
            username: "Feeds".to_string(),
            avatar: Some("abc".to_string()),
        };
        assert_eq!(
            bot.avatar_url().as_deref(),
            Some("https://cdn.discordapp.com/avatars/42/abc.png")
        );

        bot.avatar = None;
        assert!(bot.avatar_url().is_none());
    }
}
