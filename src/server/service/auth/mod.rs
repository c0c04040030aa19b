//! OAuth2 login with Discord
//!
//! Covers the whole token lifecycle: building the authorization URL, exchanging
//! the callback code, refreshing expired tokens, revoking tokens on logout and
//! fetching the user's identity and guilds with their access token.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod discord;
pub mod login;
pub mod logout;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }
}

/// Current time in epoch seconds.
pub(crate) fn now_epoch_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}
