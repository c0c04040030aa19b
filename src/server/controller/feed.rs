use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        feed::{CreateFeedDto, FeedDto, SendArticleDto, SentMessageDto, UpdateFeedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, GuildAccess},
        model::feed::FeedParam,
        service::feed::FeedService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping feed endpoints in OpenAPI documentation
pub static FEED_TAG: &str = "feed";

/// List the guild's feeds.
///
/// # Access Control
/// Logged in user who manages the guild, with the bot in the guild.
///
/// # Returns
/// - `200 OK` - Feeds, oldest first
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - User cannot manage the guild
/// - `404 Not Found` - Bot is not in the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/feeds",
    tag = FEED_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Feeds of the guild", body = Vec<FeedDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feeds(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let feeds = feed_service(&state).get_feeds(guild_id).await?;

    Ok(Json(
        feeds
            .into_iter()
            .map(FeedParam::into_dto)
            .collect::<Vec<FeedDto>>(),
    ))
}

/// Create a feed.
///
/// The channel must belong to the guild and the guild must be below its feed
/// limit.
///
/// # Returns
/// - `201 Created` - Created feed
/// - `400 Bad Request` - Invalid body, foreign channel or feed limit reached
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/feeds",
    tag = FEED_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateFeedDto,
    responses(
        (status = 201, description = "Created feed", body = FeedDto),
        (status = 400, description = "Invalid feed or feed limit reached", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feed(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<CreateFeedDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let feed = feed_service(&state).create_feed(guild_id, payload).await?;

    Ok((StatusCode::CREATED, Json(feed.into_dto())))
}

/// Edit a feed.
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/feeds/{feed_id}",
    tag = FEED_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("feed_id" = i32, Path, description = "Feed ID")
    ),
    request_body = UpdateFeedDto,
    responses(
        (status = 200, description = "Feed after the update", body = FeedDto),
        (status = 400, description = "Invalid feed or foreign channel", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild or feed not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_feed(
    State(state): State<AppState>,
    session: Session,
    ApiPath((guild_id, feed_id)): ApiPath<(u64, i32)>,
    ApiJson(payload): ApiJson<UpdateFeedDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    let feed = feed_service(&state)
        .update_feed(guild_id, feed_id, payload)
        .await?;

    Ok(Json(feed.into_dto()))
}

/// Delete a feed.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/feeds/{feed_id}",
    tag = FEED_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("feed_id" = i32, Path, description = "Feed ID")
    ),
    responses(
        (status = 204, description = "Feed deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild or feed not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feed(
    State(state): State<AppState>,
    session: Session,
    ApiPath((guild_id, feed_id)): ApiPath<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require_guild(guild_id)
        .await?;

    feed_service(&state).delete_feed(guild_id, feed_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Send an article rendered with the feed's message format.
///
/// Guild access is checked by the `require_guild_access` route layer, then the
/// request is rate limited to one every ten seconds per feed.
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/feeds/{feed_id}/message",
    tag = FEED_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("feed_id" = i32, Path, description = "Feed ID")
    ),
    request_body = SendArticleDto,
    responses(
        (status = 200, description = "Message sent", body = SentMessageDto),
        (status = 400, description = "Foreign channel or empty article", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the guild", body = ErrorDto),
        (status = 404, description = "Guild or feed not found", body = ErrorDto),
        (status = 429, description = "Too many requests for this feed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_feed_message(
    State(state): State<AppState>,
    Extension(access): Extension<GuildAccess>,
    ApiPath((_guild_id, feed_id)): ApiPath<(u64, i32)>,
    ApiJson(payload): ApiJson<SendArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = feed_service(&state)
        .send_article(&state.discord_http, access.guild.id, feed_id, payload)
        .await?;

    Ok(Json(sent))
}

fn feed_service(state: &AppState) -> FeedService<'_> {
    FeedService::new(&state.db, state.cache.as_ref(), state.feed_limit)
}
