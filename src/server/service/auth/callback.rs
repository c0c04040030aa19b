use crate::server::{
    error::AppError,
    model::{oauth::DiscordIdentity, session::StoredToken},
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Completes the OAuth2 callback.
    ///
    /// Exchanges the code for a token and fetches the user's identity. Web cache
    /// entries left over from an earlier login are dropped so the new session
    /// never sees another token's data.
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<(StoredToken, DiscordIdentity), AppError> {
        let token = self.create_auth_token(authorization_code).await?;
        let identity = self.fetch_identity(&token).await?;

        self.delete_cached_user_data(identity.id).await?;

        Ok((token, identity))
    }
}
