//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors and
//! implements `IntoResponse` so controllers can return `Result<_, AppError>` and
//! have failures mapped to a status code and an `ErrorDto` body.

pub mod auth;
pub mod cache;
pub mod config;
pub mod internal;
pub mod shard;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, cache::CacheError, config::ConfigError, internal::InternalError,
        shard::ShardError,
    },
};

/// Top-level application error type.
///
/// Domain errors like `AuthError` handle their own response mapping, the generic
/// variants map to standard status codes and everything else becomes a logged
/// 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state such as a malformed stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Cache mirror read or write failure.
    #[error(transparent)]
    CacheErr(#[from] CacheError),

    /// Shard lifecycle failure. Fatal for the process.
    #[error(transparent)]
    ShardErr(#[from] ShardError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session store error raised while migrating or cleaning up sessions.
    #[error(transparent)]
    SessionStoreErr(#[from] tower_sessions::session_store::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Listener or TLS file error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Cached Discord payload could not be decoded.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The user is logged in but may not access the resource.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged, a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Boxes the error to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error.
///
/// Logs the full error and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that client errors keep their message and status.
    ///
    /// Expected: 400, 403 and 404 for the matching variants
    #[test]
    fn maps_client_errors_to_status_codes() {
        let cases = [
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    /// Tests that unauthenticated requests get 401.
    ///
    /// Expected: 401 Unauthorized
    #[test]
    fn maps_not_logged_in_to_unauthorized() {
        let response = AppError::from(AuthError::NotLoggedIn).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests that backend failures never leak details.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn maps_backend_errors_to_internal_server_error() {
        let response = AppError::DbErr(sea_orm::DbErr::Custom("boom".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
