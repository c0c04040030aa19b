//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models (or cached JSON) at the repository
//! boundary and transformed to DTOs at the controller boundary.

pub mod feed;
pub mod mirror;
pub mod oauth;
pub mod profile;
pub mod session;
pub mod web_cache;
