//! Request extractors whose rejections use the API error body.
//!
//! Axum's own `Json` and `Path` reject with 422 or plain text. These wrappers
//! convert the rejection into `AppError::BadRequest` so every client error is a
//! 400 with an `ErrorDto` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
