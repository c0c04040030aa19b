use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[component]
pub fn Header() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let user = user_store.read().user.clone();
    let fetch_completed = user_store.read().fetched;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user) = user {
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-ghost flex gap-2 items-center",
                    if let Some(avatar) = user.avatar_url() {
                        img {
                            src: "{avatar}",
                            alt: "{user.display_name()}",
                            class: "w-8 h-8 rounded-full",
                        }
                    }
                    p { "{user.display_name()}" }
                }
                a {
                    href: "/api/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                a {
                    href: "/api/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}
