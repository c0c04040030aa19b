//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned for each request through
//! Axum's state extraction. It holds:
//! - Database connection pool for feeds, profiles, stats and the web cache
//! - Cache store for the Discord mirror
//! - HTTP client and OAuth2 client for Discord authentication
//! - Discord HTTP client for sending articles

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::cache::Cache;

/// OAuth2 client for Discord with the authorize, revocation and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: connection pools and clients share their
/// internals, `Cache` and `Http` are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Key-value store holding the Discord guild, channel and user mirror.
    pub cache: Cache,

    /// HTTP client for OAuth2 and Discord REST calls made with user tokens.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Discord HTTP client authenticated as the bot.
    pub discord_http: Arc<Http>,

    /// Application (and bot user) ID.
    pub client_id: u64,

    /// Maximum number of feeds per guild.
    pub feed_limit: u64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        cache: Cache,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        client_id: u64,
        feed_limit: u64,
    ) -> Self {
        Self {
            db,
            cache,
            http_client,
            oauth_client,
            discord_http,
            client_id,
            feed_limit,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by the given database and an in-memory cache.
    ///
    /// Discord endpoints point at their real URLs, so tests must not reach code
    /// paths that call them.
    pub fn for_test(db: DatabaseConnection, cache: Cache) -> Self {
        use crate::server::{config::Config, startup};

        let config = Config::from_vars(|name| {
            let value = match name {
                "DATABASE_URL" => "sqlite::memory:",
                "REDIS_URL" => "redis://127.0.0.1/",
                "DISCORD_BOT_TOKEN" => "bot-token",
                "DISCORD_CLIENT_ID" => "1000",
                "DISCORD_CLIENT_SECRET" => "secret",
                "DISCORD_REDIRECT_URL" => "http://localhost:8080/api/authorize",
                _ => return None,
            };
            Some(value.to_string())
        })
        .unwrap();

        Self::new(
            db,
            cache,
            startup::setup_reqwest_client().unwrap(),
            startup::setup_oauth_client(&config).unwrap(),
            startup::setup_discord_http(&config),
            1000,
            config.feed_limit,
        )
    }
}
