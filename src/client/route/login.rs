use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[component]
pub fn Login() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_logged_in = user_store.read().user.is_some();
    let fetch_completed = user_store.read().fetched;

    use_effect(use_reactive!(|user_logged_in| {
        if user_logged_in {
            nav.push(Route::Dashboard {});
        }
    }));

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetch_completed || user_logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                p {
                    class: "text-2xl",
                    {SITE_NAME}
                }
                p {
                    class: "opacity-70",
                    "Log in to manage the feeds of your servers."
                }
                a {
                    href: "/api/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaDiscord
                        }
                        p {
                            "Login with Discord"
                        }
                    }
                }
            }
        }
    }
}
