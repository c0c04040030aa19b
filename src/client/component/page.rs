use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-xl" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-2 items-center justify-center",
            p { class: "text-4xl font-bold", "{status}" }
            p { "{message}" }
        }
    )
}
