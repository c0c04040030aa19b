pub mod dashboard;
pub mod guild;
pub mod home;
pub mod login;
pub mod not_found;

pub use dashboard::Dashboard;
pub use guild::GuildFeeds;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
