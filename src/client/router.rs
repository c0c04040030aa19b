use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{Dashboard, GuildFeeds, Home, Login, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
        #[nest("/cp")]
            #[route("/")]
            Dashboard {},

            #[route("/:guild_id")]
            GuildFeeds { guild_id: u64 },
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
