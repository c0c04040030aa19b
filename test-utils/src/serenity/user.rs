//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a regular (non-bot) user with no avatar.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User
pub fn create_test_user(user_id: u64, username: &str) -> User {
    build_user(user_id, username, false)
}

/// Creates a bot user with no avatar.
pub fn create_test_bot_user(user_id: u64, username: &str) -> User {
    build_user(user_id, username, true)
}

fn build_user(user_id: u64, username: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
