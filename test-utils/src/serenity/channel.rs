//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a text channel in the given guild.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel
pub fn create_test_channel(channel_id: u64, guild_id: u64, name: &str, position: u16) -> GuildChannel {
    create_test_channel_of_kind(channel_id, guild_id, name, position, 0)
}

/// Creates a channel with a raw Discord channel type.
///
/// Common values are `0` (text), `2` (voice), `4` (category) and `5` (news).
pub fn create_test_channel_of_kind(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    kind: u8,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
