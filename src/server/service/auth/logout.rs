use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::session::AuthSession, service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Logs the user out.
    ///
    /// Revokes the session's token if there is one, deletes the user's cached
    /// Discord data if an identity is known and destroys the session.
    pub async fn logout(&self, session: &Session) -> Result<(), AppError> {
        let auth_session = AuthSession::new(session);

        if let Some(token) = auth_session.get_token().await? {
            self.revoke_auth_token(&token).await?;
        }

        if let Some(identity) = auth_session.get_identity().await? {
            self.delete_cached_user_data(identity.id).await?;
        }

        auth_session.destroy().await
    }
}
