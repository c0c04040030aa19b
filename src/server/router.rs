use axum::{http::Request, middleware::from_fn_with_state, Router};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorError, GovernorLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        channel::{self, CHANNEL_TAG},
        feed::{self, FEED_TAG},
        guild::{self, GUILD_TAG},
        stats::{self, STATS_TAG},
        user::{self, USER_TAG},
    },
    error::AppError,
    middleware::auth::require_guild_access,
    state::AppState,
};

/// Seconds between article sends of the same feed.
const FEED_MESSAGE_INTERVAL_SECONDS: u64 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "Feed Panel API", description = "Control panel for the RSS feed bot"),
    tags(
        (name = AUTH_TAG, description = "Discord OAuth2 login"),
        (name = USER_TAG, description = "Logged in user and bot user"),
        (name = STATS_TAG, description = "Public statistics and configuration"),
        (name = GUILD_TAG, description = "Guild profiles"),
        (name = CHANNEL_TAG, description = "Guild channels"),
        (name = FEED_TAG, description = "Guild feeds"),
    )
)]
struct ApiDoc;

/// Rate limit key for the send-article route: its path, which names the feed.
#[derive(Clone, Copy, Debug)]
pub struct FeedPathKey;

impl KeyExtractor for FeedPathKey {
    type Key = String;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        Ok(req.uri().path().trim_end_matches('/').to_string())
    }
}

/// Builds the API router with its OpenAPI document served at `/api/docs`.
pub fn router(state: AppState) -> Result<Router, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(FEED_MESSAGE_INTERVAL_SECONDS)
        .burst_size(1)
        .key_extractor(FeedPathKey)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    // Last layer runs first: unauthorized requests never reach the governor.
    let rate_limited = OpenApiRouter::new()
        .routes(routes!(feed::send_feed_message))
        .route_layer(GovernorLayer::new(governor))
        .route_layer(from_fn_with_state(state.clone(), require_guild_access));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::authorize))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_current_user))
        .routes(routes!(user::get_current_user_guilds))
        .routes(routes!(user::get_bot_user))
        .routes(routes!(stats::get_stats))
        .routes(routes!(stats::get_config))
        .routes(routes!(guild::get_guild, guild::update_guild))
        .routes(routes!(channel::get_channels))
        .routes(routes!(feed::get_feeds, feed::create_feed))
        .routes(routes!(feed::update_feed, feed::delete_feed))
        .merge(rate_limited)
        .split_for_parts();

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state))
}
