use dioxus::prelude::*;

use crate::client::constant::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    rsx!(footer {
        class: "footer footer-center p-6 bg-base-200 text-base-content",
        div {
            class: "flex flex-wrap justify-center gap-4",
            a {
                class: "link link-hover",
                href: "/api/docs",
                "API"
            }
            a {
                class: "link link-hover",
                href: "/api/login",
                "Control Panel"
            }
        }
        p {
            class: "opacity-60",
            "{SITE_NAME} is not affiliated with Discord."
        }
    })
}
