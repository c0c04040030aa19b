use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::{BotUserDto, ManagedGuildDto, UserDto},
};

/// Get the logged in user, `None` without a session
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/users/@me")).await?;
    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

/// Get the guilds the logged in user can manage
pub async fn get_user_guilds() -> Result<Vec<ManagedGuildDto>, ApiError> {
    let response = send_request(get("/api/users/@me/guilds")).await?;
    parse_response(response).await
}

/// Get the bot user, `None` until the bot is ready
pub async fn get_bot_user() -> Result<Option<BotUserDto>, ApiError> {
    let response = send_request(get("/api/users/@bot")).await?;
    if response.status() == 404 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}
