use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, GuildProfileDto, UpdateGuildProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::guild::GuildService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get a guild with its bot profile.
///
/// # Access Control
/// Logged in user who manages the guild, with the bot in the guild.
///
/// # Returns
/// - `200 OK` - Guild snapshot, profile and feed limit
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - User cannot manage the guild
/// - `404 Not Found` - Bot is not in the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild", body = GuildDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let guild = GuildService::new(&state.db, state.cache.as_ref(), state.feed_limit)
        .get_guild(guild_id)
        .await?;

    Ok(Json(guild))
}

/// Create or update a guild's bot profile.
///
/// Only the fields present in the body are written.
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateGuildProfileDto,
    responses(
        (status = 200, description = "Profile after the update", body = GuildProfileDto),
        (status = 400, description = "Invalid profile setting", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guild(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdateGuildProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let profile = GuildService::new(&state.db, state.cache.as_ref(), state.feed_limit)
        .update_profile(guild_id, payload)
        .await?;

    Ok(Json(profile.into_dto()))
}
