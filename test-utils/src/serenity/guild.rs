//! Test factory for creating Serenity Guild objects.

use serenity::all::{Guild, GuildChannel};

/// Creates a test Serenity Guild with customizable fields.
///
/// The icon hash is padded to 32 characters (34 for animated `a_` icons) since
/// Serenity validates the hash format. The guild reports 100 members and has no
/// channels.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// ```rust,ignore
/// let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
/// assert_eq!(guild.icon_hash.unwrap().to_string(), "abc12300000000000000000000000000");
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    build_guild(guild_id, name, icon_hash, Vec::new())
}

/// Creates a test guild containing the given channels.
pub fn create_test_guild_with_channels(
    guild_id: u64,
    name: &str,
    channels: Vec<GuildChannel>,
) -> Guild {
    build_guild(guild_id, name, None, channels)
}

fn build_guild(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    channels: Vec<GuildChannel>,
) -> Guild {
    let formatted_icon = icon_hash.map(|hash| {
        if hash.starts_with("a_") {
            if hash.len() < 34 {
                format!("{:0<34}", hash)
            } else {
                hash.to_string()
            }
        } else if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    let channels: Vec<serde_json::Value> = channels
        .iter()
        .map(|channel| serde_json::to_value(channel).expect("Failed to serialize test channel"))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
