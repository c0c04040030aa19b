use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AccessToken, AuthorizationCode, EmptyExtraTokenFields, RefreshToken,
    StandardRevocableToken, StandardTokenResponse, TokenResponse,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::session::StoredToken,
    service::auth::{now_epoch_seconds, AuthService},
};

type DiscordTokenResponse = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

/// Outcome of checking a session token before use.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidToken {
    /// The stored token is still valid
    Current(StoredToken),
    /// The token was expired and has been replaced
    Refreshed(StoredToken),
}

impl ValidToken {
    pub fn token(&self) -> &StoredToken {
        match self {
            ValidToken::Current(token) | ValidToken::Refreshed(token) => token,
        }
    }
}

impl<'a> AuthService<'a> {
    /// Exchanges an authorization code for a token.
    pub async fn create_auth_token(&self, code: String) -> Result<StoredToken, AppError> {
        let response = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|e| {
                tracing::error!("Failed to exchange authorization code: {}", e);
                AuthError::TokenRequest(e.to_string())
            })?;

        Ok(format_token(&response, now_epoch_seconds()))
    }

    /// Returns a usable token, refreshing it first when it is expired.
    pub async fn get_auth_token(&self, token: StoredToken) -> Result<ValidToken, AppError> {
        if !token.is_expired_at(now_epoch_seconds()) {
            return Ok(ValidToken::Current(token));
        }

        Ok(ValidToken::Refreshed(self.refresh_auth_token(&token).await?))
    }

    /// Performs a refresh-token grant.
    ///
    /// Tokens without a refresh token cannot be renewed and end the login.
    pub async fn refresh_auth_token(&self, token: &StoredToken) -> Result<StoredToken, AppError> {
        let Some(refresh_token) = token.refresh_token.clone() else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let response = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(refresh_token))
            .request_async(self.http_client)
            .await
            .map_err(|e| {
                tracing::error!("Failed to refresh access token: {}", e);
                AuthError::TokenRequest(e.to_string())
            })?;

        let mut refreshed = format_token(&response, now_epoch_seconds());
        // Discord may omit the refresh token on refresh
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = token.refresh_token.clone();
        }

        Ok(refreshed)
    }

    /// Revokes the access token and, when present, the refresh token.
    pub async fn revoke_auth_token(&self, token: &StoredToken) -> Result<(), AppError> {
        let mut revocable = vec![StandardRevocableToken::AccessToken(AccessToken::new(
            token.access_token.clone(),
        ))];
        if let Some(refresh_token) = &token.refresh_token {
            revocable.push(StandardRevocableToken::RefreshToken(RefreshToken::new(
                refresh_token.clone(),
            )));
        }

        for token in revocable {
            self.oauth_client
                .revoke_token(token)
                .map_err(|e| AuthError::TokenRevocation(e.to_string()))?
                .request_async(self.http_client)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to revoke token: {}", e);
                    AuthError::TokenRevocation(e.to_string())
                })?;
        }

        Ok(())
    }
}

/// Converts Discord's token response into the session representation.
pub fn format_token(response: &DiscordTokenResponse, now: i64) -> StoredToken {
    StoredToken::format(
        response.access_token().secret().clone(),
        response.refresh_token().map(|t| t.secret().clone()),
        response.token_type().as_ref().to_string(),
        response
            .scopes()
            .map(|scopes| scopes.iter().map(|scope| scope.to_string()).collect())
            .unwrap_or_default(),
        response.expires_in().map(|duration| duration.as_secs()),
        now,
    )
}
