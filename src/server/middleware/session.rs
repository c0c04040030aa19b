//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys and
//! operations of its concern:
//! - `AuthSession` - OAuth2 token and identity of the logged in user
//! - `CsrfSession` - CSRF state for the OAuth2 authorization flow

use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::session::{SessionIdentity, StoredToken},
};

const SESSION_AUTH_TOKEN: &str = "auth:token";
const SESSION_AUTH_IDENTITY: &str = "auth:identity";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's OAuth2 token, replacing any previous token.
    pub async fn set_token(&self, token: &StoredToken) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_TOKEN, token).await?;
        Ok(())
    }

    pub async fn get_token(&self) -> Result<Option<StoredToken>, AppError> {
        Ok(self.session.get(SESSION_AUTH_TOKEN).await?)
    }

    pub async fn set_identity(&self, identity: &SessionIdentity) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_IDENTITY, identity).await?;
        Ok(())
    }

    pub async fn get_identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        Ok(self.session.get(SESSION_AUTH_IDENTITY).await?)
    }

    /// A user is authenticated once both identity and token are stored.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_identity().await?.is_some() && self.get_token().await?.is_some())
    }

    /// Deletes the session from the store and clears its data.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// The token is stored when the login redirect is issued and consumed by the
/// OAuth2 callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Consumes the stored token and compares it with the callback `state`.
    ///
    /// # Returns
    /// - `Ok(())` - Token matched
    /// - `Err(AuthError::CsrfValidationFailed)` - No token stored or mismatch
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    fn token() -> StoredToken {
        StoredToken::format(
            "access".to_string(),
            Some("refresh".to_string()),
            "bearer".to_string(),
            vec!["identify".to_string()],
            Some(3600),
            0,
        )
    }

    /// Tests that authentication requires both token and identity.
    ///
    /// Expected: false until both are stored, false again after destroy
    #[tokio::test]
    async fn authenticated_with_token_and_identity() -> Result<(), AppError> {
        let mut test = TestContext::new();
        let session = test.session().await.unwrap();
        let auth = AuthSession::new(session);

        assert!(!auth.is_authenticated().await?);

        auth.set_token(&token()).await?;
        assert!(!auth.is_authenticated().await?);

        auth.set_identity(&SessionIdentity {
            id: 42,
            username: "user".to_string(),
        })
        .await?;
        assert!(auth.is_authenticated().await?);
        assert_eq!(auth.get_token().await?, Some(token()));

        auth.destroy().await?;
        assert!(!auth.is_authenticated().await?);

        Ok(())
    }

    /// Tests CSRF validation.
    ///
    /// Verifies a token validates once and a mismatch fails.
    ///
    /// Expected: Ok on first match, Err afterwards
    #[tokio::test]
    async fn csrf_token_validates_once() -> Result<(), AppError> {
        let mut test = TestContext::new();
        let session = test.session().await.unwrap();
        let csrf = CsrfSession::new(session);

        csrf.set_token("state".to_string()).await?;
        assert!(csrf.validate("state").await.is_ok());
        assert!(csrf.validate("state").await.is_err());

        csrf.set_token("state".to_string()).await?;
        assert!(csrf.validate("other").await.is_err());

        Ok(())
    }
}
