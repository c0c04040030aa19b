use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::AuthService;

impl<'a> AuthService<'a> {
    /// Builds the Discord authorization URL.
    ///
    /// Requests the `identify` and `guilds` scopes and always prompts for consent.
    ///
    /// # Returns
    /// - The URL to redirect the user to
    /// - The CSRF token to store in the session and compare on callback
    pub fn authorization_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .add_extra_param("prompt", "consent")
            .url()
    }
}
