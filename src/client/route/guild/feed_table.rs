use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::component::ConfirmationModal,
    model::{feed::FeedDto, guild::ChannelDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::feed::{delete_feed, update_feed},
    model::feed::UpdateFeedDto,
};

#[component]
pub fn FeedTable(
    guild_id: u64,
    feeds: Vec<FeedDto>,
    channels: Vec<ChannelDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut feed_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    // Feed being switched and its new disabled state
    let mut feed_to_toggle = use_signal(|| None::<(i32, bool)>);

    #[cfg(feature = "web")]
    let toggle_future = use_resource(move || async move {
        let (id, disabled) = feed_to_toggle()?;
        let payload = UpdateFeedDto {
            disabled: Some(disabled),
            ..Default::default()
        };
        Some(update_feed(guild_id, id, payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = toggle_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => *refetch_trigger.write() += 1,
                Err(err) => tracing::error!("Failed to update feed: {}", err),
            }
            feed_to_toggle.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some((id, _)) = feed_to_delete() {
                Some(delete_feed(guild_id, id).await)
            } else {
                None
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete feed: {}", err);
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Title" }
                        th { "URL" }
                        th { "Channel" }
                        th { class: "text-center", "Status" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for feed in feeds {
                        {
                            let feed_id = feed.id;
                            let feed_title = feed.title.clone();
                            let disabled = feed.disabled;
                            let channel_name = channels
                                .iter()
                                .find(|c| c.id == feed.channel_id)
                                .map(|c| format!("#{}", c.name))
                                .unwrap_or_else(|| feed.channel_id.to_string());

                            rsx! {
                                tr {
                                    key: "{feed_id}",
                                    td { "{feed.title}" }
                                    td {
                                        class: "max-w-xs truncate",
                                        a {
                                            class: "link",
                                            href: "{feed.url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{feed.url}"
                                        }
                                    }
                                    td { "{channel_name}" }
                                    td {
                                        class: "text-center",
                                        if feed.disabled {
                                            span { class: "badge badge-warning", "Disabled" }
                                        } else {
                                            span { class: "badge badge-success", "Active" }
                                        }
                                    }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm",
                                                disabled: feed_to_toggle().is_some(),
                                                onclick: move |_| feed_to_toggle.set(Some((feed_id, !disabled))),
                                                if disabled { "Enable" } else { "Disable" }
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| {
                                                    feed_to_delete.set(Some((feed_id, feed_title.clone())));
                                                    show_delete_modal.set(true);
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Feed".to_string(),
            message: rsx!(
                if let Some((_, title)) = feed_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete the feed "
                        span { class: "font-bold", "\"{title}\"" }
                        "? This action cannot be undone."
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    )
}
