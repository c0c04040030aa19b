mod create_feed_modal;
mod feed_table;
mod settings;

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
    model::{
        feed::FeedDto,
        guild::{ChannelDto, GuildDto},
    },
};

use create_feed_modal::CreateFeedModal;
use feed_table::FeedTable;
use settings::GuildSettings;

#[cfg(feature = "web")]
use crate::client::api::{
    feed::get_feeds,
    guild::{get_channels, get_guild},
};

/// Control panel page of a single guild: its feeds and bot settings.
#[component]
pub fn GuildFeeds(guild_id: u64) -> Element {
    #[allow(unused_mut)]
    let mut guild = use_signal(|| None::<Result<GuildDto, ApiError>>);
    #[allow(unused_mut)]
    let mut channels = use_signal(Vec::<ChannelDto>::new);

    #[cfg(feature = "web")]
    {
        let guild_future = use_resource(use_reactive!(|guild_id| get_guild(guild_id)));
        let channels_future = use_resource(use_reactive!(|guild_id| get_channels(guild_id)));

        use_effect(move || {
            if let Some(result) = &*guild_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch guild: {}", err);
                }
                guild.set(Some(result.clone()));
            }
        });

        use_effect(move || match &*channels_future.read_unchecked() {
            Some(Ok(list)) => channels.set(list.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch channels: {}", err),
            None => (),
        });
    }

    rsx! {
        match guild() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(guild_data)) => rsx! {
                Title { "{guild_data.name} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl space-y-6",
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-ghost",
                            "← Back to Servers"
                        }
                        h1 { class: "text-2xl font-bold", "{guild_data.name}" }
                        FeedsSection { guild_id, limit: guild_data.limit, channels }
                        GuildSettings { guild_id, profile: guild_data.profile.clone() }
                    }
                }
            },
        }
    }
}

#[component]
fn FeedsSection(guild_id: u64, limit: u64, channels: Signal<Vec<ChannelDto>>) -> Element {
    #[allow(unused_mut)]
    let mut feeds = use_signal(|| None::<Result<Vec<FeedDto>, ApiError>>);
    let mut show_create_modal = use_signal(|| false);
    let refetch_trigger = use_signal(|| 0u32);

    // Re-runs whenever a feed was created or deleted
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_feeds(guild_id).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch feeds: {}", err);
                }
                feeds.set(Some(result.clone()));
            }
        });
    }

    let feed_count = match feeds() {
        Some(Ok(list)) => list.len() as u64,
        _ => 0,
    };
    let limit_reached = feed_count >= limit;

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center mb-4",
                    h2 {
                        class: "card-title",
                        "Feeds ({feed_count}/{limit})"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: limit_reached,
                        onclick: move |_| show_create_modal.set(true),
                        "Add Feed"
                    }
                }

                match feeds() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No feeds configured"
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        FeedTable { guild_id, feeds: list, channels: channels(), refetch_trigger }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "alert alert-error",
                            span { "Error loading feeds: {err.message}" }
                        }
                    },
                    None => rsx! {
                        div {
                            class: "text-center py-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }

                CreateFeedModal {
                    guild_id,
                    channels: channels(),
                    show: show_create_modal,
                    refetch_trigger
                }
            }
        }
    )
}
