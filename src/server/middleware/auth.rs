use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    data::mirror::GuildMirror,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        mirror::CachedGuild,
        session::{SessionIdentity, StoredToken},
    },
    service::auth::{token::ValidToken, AuthService},
    state::AppState,
    util::extract::ApiPath,
};

/// Identity and usable token of the logged in user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub identity: SessionIdentity,
    pub token: StoredToken,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self { state, session }
    }

    /// Requires a logged in user with a usable token.
    ///
    /// An expired token is refreshed and the new token is written back to the
    /// session.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Session identity and a non-expired token
    /// - `Err(AuthError::NotLoggedIn)` - Identity or token missing from the session
    /// - `Err(AppError)` - Token refresh or session failure
    pub async fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let auth_session = AuthSession::new(self.session);

        let (Some(identity), Some(token)) = (
            auth_session.get_identity().await?,
            auth_session.get_token().await?,
        ) else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let token = match self.auth_service().get_auth_token(token).await? {
            ValidToken::Current(token) => token,
            ValidToken::Refreshed(token) => {
                auth_session.set_token(&token).await?;
                token
            }
        };

        Ok(AuthenticatedUser { identity, token })
    }

    /// Requires a logged in user who manages a guild the bot is in.
    ///
    /// # Returns
    /// - `Ok((AuthenticatedUser, CachedGuild))` - User and the mirrored guild
    /// - `Err(AuthError::NotLoggedIn)` - Not logged in
    /// - `Err(AppError::Forbidden)` - User lacks manage permissions in the guild
    /// - `Err(AppError::NotFound)` - Bot is not in the guild
    pub async fn require_guild(
        &self,
        guild_id: u64,
    ) -> Result<(AuthenticatedUser, CachedGuild), AppError> {
        let user = self.require().await?;

        let guilds = self
            .auth_service()
            .get_user_guilds(user.identity.id, &user.token)
            .await?;

        let manages = guilds
            .iter()
            .any(|guild| guild.id == guild_id && guild.can_manage());
        if !manages {
            return Err(AppError::Forbidden(
                "You do not have permission to manage this guild".to_string(),
            ));
        }

        let Some(guild) = GuildMirror::new(self.state.cache.as_ref())
            .fetch(guild_id)
            .await?
        else {
            return Err(AppError::NotFound("Guild not found".to_string()));
        };

        Ok((user, guild))
    }

    fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(
            &self.state.db,
            &self.state.http_client,
            &self.state.oauth_client,
        )
    }
}

/// Path parameters of routes scoped to a guild.
#[derive(Deserialize)]
pub struct GuildPath {
    pub guild_id: u64,
}

/// User and guild resolved by [`require_guild_access`].
#[derive(Debug, Clone)]
pub struct GuildAccess {
    pub user: AuthenticatedUser,
    pub guild: CachedGuild,
}

/// Route layer requiring guild management access before the inner service runs.
///
/// Layered outside the rate limiter so rejected requests never take a slot.
/// The resolved [`GuildAccess`] is stored in the request extensions.
pub async fn require_guild_access(
    State(state): State<AppState>,
    session: Session,
    ApiPath(path): ApiPath<GuildPath>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (user, guild) = AuthGuard::new(&state, &session)
        .require_guild(path.guild_id)
        .await?;

    req.extensions_mut().insert(GuildAccess { user, guild });

    Ok(next.run(req).await)
}
