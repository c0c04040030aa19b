//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, call a service and convert the
//! result to a DTO. Every handler is annotated for the OpenAPI document.

pub mod auth;
pub mod channel;
pub mod feed;
pub mod guild;
pub mod stats;
pub mod user;
