use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, guild::ChannelDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::mirror::CachedChannel,
        service::channel::ChannelService, state::AppState, util::extract::ApiPath,
    },
};

/// Tag for grouping channel endpoints in OpenAPI documentation
pub static CHANNEL_TAG: &str = "channel";

/// List the guild's text and announcement channels, sorted by name.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/channels",
    tag = CHANNEL_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Channels of the guild", body = Vec<ChannelDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let channels = ChannelService::new(state.cache.as_ref())
        .get_channels(guild_id)
        .await?;

    Ok(Json(
        channels
            .into_iter()
            .map(CachedChannel::into_dto)
            .collect::<Vec<ChannelDto>>(),
    ))
}
