//! Data transfer objects shared by the server API and the web client.

pub mod api;
pub mod feed;
pub mod guild;
pub mod snowflake;
pub mod stats;
pub mod user;
