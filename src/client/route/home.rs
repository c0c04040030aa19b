use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaImage, FaPaperPlane, FaRss, FaSliders},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{component::Page, constant::SITE_NAME, router::Route},
    model::{
        stats::{BotConfigDto, StatsDto},
        user::BotUserDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    stats::{get_config, get_stats},
    user::get_bot_user,
};

#[component]
pub fn Home() -> Element {
    #[allow(unused_mut)]
    let mut stats = use_signal(|| None::<StatsDto>);
    #[allow(unused_mut)]
    let mut config = use_signal(|| None::<BotConfigDto>);
    #[allow(unused_mut)]
    let mut bot = use_signal(|| None::<BotUserDto>);

    #[cfg(feature = "web")]
    {
        // Stats refresh once a minute while the page is open
        let mut refresh = use_signal(|| 0u32);
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(60_000).await;
                refresh.set(refresh() + 1);
            }
        });

        let stats_future = use_resource(move || async move {
            let _ = refresh();
            get_stats().await
        });
        let config_future = use_resource(get_config);
        let bot_future = use_resource(get_bot_user);

        use_effect(move || match &*stats_future.read_unchecked() {
            Some(Ok(data)) => stats.set(Some(data.clone())),
            Some(Err(err)) => tracing::error!("Failed to fetch stats: {}", err),
            None => (),
        });

        use_effect(move || match &*config_future.read_unchecked() {
            Some(Ok(data)) => config.set(Some(data.clone())),
            Some(Err(err)) => tracing::error!("Failed to fetch bot config: {}", err),
            None => (),
        });

        use_effect(move || match &*bot_future.read_unchecked() {
            Some(Ok(data)) => bot.set(data.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch bot user: {}", err),
            None => (),
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-12",
            section {
                class: "flex flex-col items-center gap-4 text-center max-w-2xl",
                if let Some(url) = bot().and_then(|bot| bot.avatar_url()) {
                    div {
                        class: "avatar",
                        div {
                            class: "w-24 rounded-full",
                            img { src: "{url}", alt: "Bot avatar" }
                        }
                    }
                }
                h1 { class: "text-4xl font-bold", {SITE_NAME} }
                p {
                    class: "text-lg opacity-80",
                    "Deliver RSS and Atom feeds straight to your Discord channels."
                }
                div {
                    class: "flex flex-wrap justify-center gap-2",
                    if let Some(config) = config() {
                        a {
                            class: "btn btn-primary",
                            href: "{config.invite_url}",
                            match bot() {
                                Some(bot) => rsx! { "Add {bot.username} to Discord" },
                                None => rsx! { "Add to Discord" },
                            }
                        }
                    }
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-outline",
                        "Control Panel"
                    }
                }
            }

            section {
                class: "stats stats-vertical md:stats-horizontal shadow bg-base-200",
                StatItem { title: "Servers", value: stats().map(|s| s.guilds) }
                StatItem { title: "Feeds", value: stats().map(|s| s.feeds) }
                StatItem { title: "Articles delivered", value: stats().map(|s| s.articles_delivered) }
            }

            section {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4 w-full max-w-4xl",
                FeatureCard {
                    title: "Any feed",
                    description: "Subscribe channels to RSS and Atom feeds from any site.",
                    Icon { width: 24, height: 24, icon: FaRss }
                }
                FeatureCard {
                    title: "Custom messages",
                    description: "Choose how articles look with placeholders like {{title}} and {{link}}.",
                    Icon { width: 24, height: 24, icon: FaSliders }
                }
                FeatureCard {
                    title: "Image previews",
                    description: "Show or hide link embeds per feed.",
                    Icon { width: 24, height: 24, icon: FaImage }
                }
                FeatureCard {
                    title: "Test deliveries",
                    description: "Send a sample article to check a feed before it goes live.",
                    Icon { width: 24, height: 24, icon: FaPaperPlane }
                }
            }
            if let Some(config) = config() {
                p {
                    class: "opacity-60",
                    "Every server can have up to {config.default_feed_limit} feeds."
                }
            }
        }
    }
}

#[component]
fn StatItem(title: &'static str, value: Option<u64>) -> Element {
    rsx! {
        div {
            class: "stat place-items-center",
            div { class: "stat-title", "{title}" }
            div {
                class: "stat-value",
                if let Some(value) = value {
                    "{value}"
                } else {
                    span { class: "loading loading-dots loading-md" }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center gap-3",
                    {children}
                    h2 { class: "card-title", "{title}" }
                }
                p { "{description}" }
            }
        }
    }
}
