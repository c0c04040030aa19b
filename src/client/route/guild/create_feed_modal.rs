use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::component::Modal,
    model::{feed::CreateFeedDto, guild::ChannelDto},
};

#[cfg(feature = "web")]
use crate::client::api::feed::create_feed;

#[derive(Clone, Default, PartialEq)]
struct FeedFormData {
    title: String,
    url: String,
    channel_id: Option<u64>,
    text: String,
    check_titles: bool,
    image_previews: bool,
}

impl FeedFormData {
    fn new() -> Self {
        Self {
            image_previews: true,
            ..Default::default()
        }
    }

    /// Builds the request body, or the message to show when a field is invalid.
    fn to_payload(&self) -> Result<CreateFeedDto, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("URL must start with http:// or https://".to_string());
        }

        let Some(channel_id) = self.channel_id else {
            return Err("Channel is required".to_string());
        };

        let text = self.text.trim();

        Ok(CreateFeedDto {
            title: title.to_string(),
            url: url.to_string(),
            channel_id,
            text: (!text.is_empty()).then(|| text.to_string()),
            check_titles: self.check_titles,
            image_previews: self.image_previews,
        })
    }
}

#[component]
pub fn CreateFeedModal(
    guild_id: u64,
    channels: Vec<ChannelDto>,
    mut show: Signal<bool>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form = use_signal(FeedFormData::new);
    let mut submit_data = use_signal(|| None::<CreateFeedDto>);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            form.set(FeedFormData::new());
            submit_data.set(None);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submit_data() {
            Some(payload) => Some(create_feed(guild_id, payload).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create feed: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match form().to_payload() {
            Ok(payload) => {
                error.set(None);
                submit_data.set(Some(payload));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let is_submitting = submit_data.read().is_some();

    rsx!(
        Modal {
            show,
            title: "Add Feed".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,

                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Title" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        maxlength: 256,
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }

                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Feed URL" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "url",
                        placeholder: "https://example.com/rss.xml",
                        value: "{form.read().url}",
                        oninput: move |evt| form.write().url = evt.value(),
                    }
                }

                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Channel" }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| form.write().channel_id = evt.value().parse().ok(),
                        option { value: "", selected: form.read().channel_id.is_none(), "Select a channel" }
                        for channel in channels {
                            option {
                                key: "{channel.id}",
                                value: "{channel.id}",
                                selected: form.read().channel_id == Some(channel.id),
                                "#{channel.name}"
                            }
                        }
                    }
                }

                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Message format" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        maxlength: 2000,
                        placeholder: "{{title}}\n{{link}}",
                        value: "{form.read().text}",
                        oninput: move |evt| form.write().text = evt.value(),
                    }
                }

                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: form.read().check_titles,
                        onchange: move |evt| form.write().check_titles = evt.checked(),
                    }
                    span { class: "label-text", "Skip articles with a title that was already posted" }
                }

                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: form.read().image_previews,
                        onchange: move |evt| form.write().image_previews = evt.checked(),
                    }
                    span { class: "label-text", "Show link previews" }
                }

                if let Some(message) = error() {
                    div {
                        class: "alert alert-error",
                        span { "{message}" }
                    }
                }

                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Creating..."
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    )
}
