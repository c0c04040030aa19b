use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::model::guild::{GuildProfileDto, UpdateGuildProfileDto};

#[cfg(feature = "web")]
use crate::client::api::guild::update_guild;

#[derive(Clone, Default, PartialEq)]
struct SettingsForm {
    prefix: String,
    locale: String,
    timezone: String,
    date_format: String,
}

impl SettingsForm {
    fn from_profile(profile: Option<&GuildProfileDto>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        Self {
            prefix: profile.prefix.clone().unwrap_or_default(),
            locale: profile.locale.clone().unwrap_or_default(),
            timezone: profile.timezone.clone().unwrap_or_default(),
            date_format: profile.date_format.clone().unwrap_or_default(),
        }
    }

    /// Only non-empty fields are sent, empty ones keep their stored value.
    fn to_payload(&self) -> UpdateGuildProfileDto {
        fn field(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        UpdateGuildProfileDto {
            prefix: field(&self.prefix),
            locale: field(&self.locale),
            timezone: field(&self.timezone),
            date_format: field(&self.date_format),
        }
    }
}

#[component]
pub fn GuildSettings(guild_id: u64, profile: Option<GuildProfileDto>) -> Element {
    let mut form = use_signal(|| SettingsForm::from_profile(profile.as_ref()));
    let mut submit_data = use_signal(|| None::<UpdateGuildProfileDto>);
    #[allow(unused_mut)]
    let mut message = use_signal(|| None::<Result<String, String>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match submit_data() {
            Some(payload) => Some(update_guild(guild_id, payload).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(profile) => {
                    form.set(SettingsForm::from_profile(Some(profile)));
                    message.set(Some(Ok("Settings saved".to_string())));
                }
                Err(err) => {
                    tracing::error!("Failed to update guild settings: {}", err);
                    message.set(Some(Err(err.message.clone())));
                }
            }
            submit_data.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        submit_data.set(Some(form().to_payload()));
    };

    let is_submitting = submit_data.read().is_some();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title mb-4", "Settings" }
                form {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    onsubmit: on_submit,
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Command prefix" }
                        input {
                            class: "input input-bordered w-full",
                            maxlength: 10,
                            value: "{form.read().prefix}",
                            oninput: move |evt| form.write().prefix = evt.value(),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Locale" }
                        input {
                            class: "input input-bordered w-full",
                            maxlength: 64,
                            placeholder: "en-US",
                            value: "{form.read().locale}",
                            oninput: move |evt| form.write().locale = evt.value(),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Timezone" }
                        input {
                            class: "input input-bordered w-full",
                            maxlength: 64,
                            placeholder: "UTC",
                            value: "{form.read().timezone}",
                            oninput: move |evt| form.write().timezone = evt.value(),
                        }
                    }
                    label {
                        class: "form-control w-full",
                        span { class: "label-text mb-1", "Date format" }
                        input {
                            class: "input input-bordered w-full",
                            maxlength: 64,
                            placeholder: "YYYY-MM-DD",
                            value: "{form.read().date_format}",
                            oninput: move |evt| form.write().date_format = evt.value(),
                        }
                    }
                    div {
                        class: "md:col-span-2 flex items-center justify-end gap-4",
                        match message() {
                            Some(Ok(text)) => rsx! { span { class: "text-success", "{text}" } },
                            Some(Err(text)) => rsx! { span { class: "text-error", "{text}" } },
                            None => rsx! {},
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Saving..."
                            } else {
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    )
}
