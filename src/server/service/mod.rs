//! Business logic between controllers and repositories.
//!
//! Services orchestrate the SQL repositories, the cache mirror and Discord's REST
//! API, and return DTOs or parameter models to the controllers.

pub mod auth;
pub mod channel;
pub mod feed;
pub mod guild;
pub mod mirror;
pub mod stats;
pub mod user;
