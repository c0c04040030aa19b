#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod feed;

#[cfg(feature = "web")]
pub mod guild;

#[cfg(feature = "web")]
pub mod stats;

#[cfg(feature = "web")]
pub mod user;
