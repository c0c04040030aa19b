use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
    model::session::SessionIdentity,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Discord appends to the OAuth2 redirect.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code exchanged for the user's token.
    pub code: String,
}

/// Redirect to Discord's authorization page.
///
/// Stores a fresh CSRF token in the session before redirecting. A user who is
/// already logged in goes straight to the control panel.
#[utoipa::path(
    get,
    path = "/api/login",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Already logged in, redirect to the control panel"),
        (status = 307, description = "Redirect to Discord OAuth2 authorization")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/cp"));
    }

    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.authorization_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// OAuth2 callback.
///
/// Validates the CSRF state, exchanges the code for a token, stores the token
/// and identity in the session and redirects to the control panel.
///
/// # Returns
/// - `303 See Other` - Logged in, redirect to `/cp`
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Token exchange or Discord request failed
#[utoipa::path(
    get,
    path = "/api/authorize",
    tag = AUTH_TAG,
    params(
        ("code" = String, Query, description = "Authorization code from Discord"),
        ("state" = String, Query, description = "CSRF state issued by /api/login")
    ),
    responses(
        (status = 303, description = "Logged in, redirect to the control panel"),
        (status = 400, description = "CSRF validation failed", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn authorize(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let (token, identity) = auth_service.callback(params.code).await?;

    // New login, new session ID
    session.cycle_id().await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_token(&token).await?;
    auth_session
        .set_identity(&SessionIdentity {
            id: identity.id,
            username: identity.username,
        })
        .await?;

    Ok(Redirect::to("/cp"))
}

/// Log out and return to the home page.
#[utoipa::path(
    get,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Logged out, redirect home"),
        (status = 500, description = "Token revocation failed", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.http_client, &state.oauth_client)
        .logout(&session)
        .await?;

    Ok(Redirect::to("/"))
}
