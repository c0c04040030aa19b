use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::user::ManagedGuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_user_guilds;

/// Lists the guilds the user can manage feeds for.
#[component]
pub fn Dashboard() -> Element {
    #[allow(unused_mut)]
    let mut guilds = use_signal(|| None::<Result<Vec<ManagedGuildDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user_guilds);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch guilds: {}", err);
                }
                guilds.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Control Panel | {SITE_NAME}" }
        match guilds() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(guild_list)) if guild_list.is_empty() => rsx! {
                Page {
                    class: "flex flex-col gap-2 items-center justify-center w-full h-full",
                    h2 { class: "text-xl", "No servers available" }
                    p {
                        class: "opacity-70",
                        "Add the bot to a server you own or can manage to configure its feeds."
                    }
                }
            },
            Some(Ok(guild_list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-2xl font-bold mb-6", "Your servers" }
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for guild in guild_list {
                                GuildCard { key: "{guild.id}", guild }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn GuildCard(guild: ManagedGuildDto) -> Element {
    let initial = guild.name.chars().next().unwrap_or('?');

    rsx! {
        Link {
            to: Route::GuildFeeds { guild_id: guild.id },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body flex-row items-center gap-4",
                if let Some(icon) = guild.icon_url() {
                    img {
                        src: "{icon}",
                        alt: "{guild.name} icon",
                        class: "w-12 h-12 rounded-full",
                    }
                } else {
                    div {
                        class: "w-12 h-12 rounded-full bg-base-300 flex items-center justify-center font-bold",
                        "{initial}"
                    }
                }
                div {
                    p { class: "font-bold", "{guild.name}" }
                    if guild.owner {
                        p { class: "text-sm opacity-60", "Owner" }
                    }
                }
            }
        }
    }
}
