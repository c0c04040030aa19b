use crate::model::user::UserDto;

/// Logged in user shared through context.
///
/// `fetched` turns true once the first `/api/users/@me` request finished,
/// whether or not a session exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}
