use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The `state` in the callback URL does not match the token stored in the
    /// session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No token or identity in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User is not logged in")]
    NotLoggedIn,

    /// Discord's token endpoint rejected an authorization code or refresh token.
    #[error("OAuth2 token request failed: {0}")]
    TokenRequest(String),

    /// Discord's revocation endpoint did not accept the token.
    #[error("OAuth2 token revocation failed: {0}")]
    TokenRevocation(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `NotLoggedIn` → 401 Unauthorized
/// - Token endpoint failures → 500 Internal Server Error, details logged
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
