//! Discord REST calls made on behalf of the logged in user.
//!
//! Responses are kept in the `web_cache` table for ten minutes so page loads do
//! not hit Discord's per-user rate limits.

use chrono::{Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    data::web_cache::WebCacheRepository,
    error::AppError,
    model::{
        oauth::{DiscordIdentity, UserGuild},
        session::StoredToken,
        web_cache::WebCacheKind,
    },
    service::auth::AuthService,
};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";
const WEB_CACHE_TTL_MINUTES: i64 = 10;

impl<'a> AuthService<'a> {
    /// Fetches the identity of the token owner straight from Discord.
    pub async fn fetch_identity(&self, token: &StoredToken) -> Result<DiscordIdentity, AppError> {
        self.discord_get(token, "/users/@me").await
    }

    /// Gets the user's identity, served from the web cache when fresh.
    pub async fn get_identity(
        &self,
        user_id: u64,
        token: &StoredToken,
    ) -> Result<DiscordIdentity, AppError> {
        if let Some(identity) = self.cached(user_id, WebCacheKind::User).await? {
            return Ok(identity);
        }

        let identity = self.fetch_identity(token).await?;
        self.store(user_id, WebCacheKind::User, &identity).await?;

        Ok(identity)
    }

    /// Gets the guilds the user is a member of, served from the web cache when fresh.
    pub async fn get_user_guilds(
        &self,
        user_id: u64,
        token: &StoredToken,
    ) -> Result<Vec<UserGuild>, AppError> {
        if let Some(guilds) = self.cached(user_id, WebCacheKind::Guilds).await? {
            return Ok(guilds);
        }

        let guilds: Vec<UserGuild> = self.discord_get(token, "/users/@me/guilds").await?;
        self.store(user_id, WebCacheKind::Guilds, &guilds).await?;

        Ok(guilds)
    }

    /// Deletes every web cache entry of the user.
    pub async fn delete_cached_user_data(&self, user_id: u64) -> Result<(), AppError> {
        WebCacheRepository::new(self.db)
            .delete_for_user(user_id)
            .await?;
        Ok(())
    }

    async fn discord_get<T: DeserializeOwned>(
        &self,
        token: &StoredToken,
        path: &str,
    ) -> Result<T, AppError> {
        let value = self
            .http_client
            .get(format!("{}{}", DISCORD_API_URL, path))
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(value)
    }

    async fn cached<T: DeserializeOwned>(
        &self,
        user_id: u64,
        kind: WebCacheKind,
    ) -> Result<Option<T>, AppError> {
        let repo = WebCacheRepository::new(self.db);
        let Some(data) = repo.get(user_id, kind, Utc::now()).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&data)?))
    }

    async fn store<T: Serialize>(
        &self,
        user_id: u64,
        kind: WebCacheKind,
        value: &T,
    ) -> Result<(), AppError> {
        let expires_at = Utc::now() + Duration::minutes(WEB_CACHE_TTL_MINUTES);

        WebCacheRepository::new(self.db)
            .upsert(user_id, kind, serde_json::to_string(value)?, expires_at)
            .await?;

        Ok(())
    }
}
