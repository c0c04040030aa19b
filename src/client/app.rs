use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                let user = match result {
                    Ok(user) => user.clone(),
                    Err(err) => {
                        tracing::error!("Failed to fetch user: {}", err);
                        None
                    }
                };
                user_store.set(UserState {
                    user,
                    fetched: true,
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Deliver RSS feeds to your Discord channels"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
