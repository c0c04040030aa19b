use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{BotUserDto, ManagedGuildDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::oauth::UserGuild,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged in user.
///
/// # Returns
/// - `200 OK` - User identity
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord request failed
#[utoipa::path(
    get,
    path = "/api/users/@me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require().await?;

    let identity = user_service(&state)
        .get_current_user(user.identity.id, &user.token)
        .await?;

    Ok(Json(identity.into_dto()))
}

/// Get the guilds the logged in user can manage.
///
/// Only guilds where the user is owner, administrator or may manage channels
/// and the bot is a member are returned.
#[utoipa::path(
    get,
    path = "/api/users/@me/guilds",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Manageable guilds", body = Vec<ManagedGuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &session).require().await?;

    let guilds = user_service(&state)
        .get_managed_guilds(user.identity.id, &user.token)
        .await?;

    Ok(Json(
        guilds
            .into_iter()
            .map(UserGuild::into_dto)
            .collect::<Vec<ManagedGuildDto>>(),
    ))
}

/// Get the bot user.
#[utoipa::path(
    get,
    path = "/api/users/@bot",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Bot user", body = BotUserDto),
        (status = 404, description = "Bot user not cached yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_user(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bot = user_service(&state)
        .get_bot_user(state.client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bot user not found".to_string()))?;

    Ok(Json(bot.into_bot_dto()))
}

fn user_service(state: &AppState) -> UserService<'_> {
    UserService::new(
        AuthService::new(&state.db, &state.http_client, &state.oauth_client),
        state.cache.as_ref(),
    )
}
