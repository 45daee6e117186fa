//! Profile tab: view and edit names and bio.

use api::{ProfileInfo, ProfileUpdate};
use api::validate::{field_error, Field};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, TextArea};
use ui::{server_error_message, AlertModal, AlertVariant};

#[component]
pub fn ProfileTab() -> Element {
    let mut profile = use_resource(|| api::get_profile());

    let mut editing = use_signal(|| false);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut first_name_error = use_signal(|| Option::<String>::None);
    let mut last_name_error = use_signal(|| Option::<String>::None);
    let mut updating = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_success = use_signal(|| false);

    let loaded: Option<Option<ProfileInfo>> = profile.read().clone().map(|r| r.ok().flatten());

    let start_editing = move |_| {
        if let Some(Some(p)) = profile.read().clone().map(|r| r.ok().flatten()) {
            first_name.set(p.first_name.unwrap_or_default());
            last_name.set(p.last_name.unwrap_or_default());
            bio.set(p.bio.unwrap_or_default());
        }
        first_name_error.set(None);
        last_name_error.set(None);
        error.set(None);
        editing.set(true);
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            first_name_error
                .set(field_error(Field::FirstName, &first_name(), None).map(|e| e.to_string()));
            last_name_error
                .set(field_error(Field::LastName, &last_name(), None).map(|e| e.to_string()));
            if first_name_error().is_some() || last_name_error().is_some() {
                return;
            }

            updating.set(true);
            error.set(None);

            let update = ProfileUpdate {
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                bio: Some(bio()),
                avatar_url: None,
            };

            match api::update_profile(update).await {
                Ok(_) => {
                    editing.set(false);
                    show_success.set(true);
                    profile.restart();
                }
                Err(e) => error.set(Some(server_error_message(&e))),
            }
            updating.set(false);
        });
    };

    let profile_view = match loaded {
        None => rsx! { p { class: "muted", "Loading profile..." } },
        Some(None) => rsx! { p { class: "muted", "No profile yet. Add your details below." } },
        Some(Some(p)) => rsx! {
            if !editing() {
                dl {
                    class: "profile-rows",
                    if let Some(first) = p.first_name {
                        dt { "First name" }
                        dd { "{first}" }
                    }
                    if let Some(last) = p.last_name {
                        dt { "Last name" }
                        dd { "{last}" }
                    }
                    if let Some(bio) = p.bio {
                        dt { "Bio" }
                        dd { "{bio}" }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "profile-card",
            h2 { "Your profile" }

            {profile_view}

            if editing() {
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                form {
                    onsubmit: handle_save,
                    div {
                        class: "field-row",
                        Input {
                            label: "First name".to_string(),
                            value: first_name(),
                            error: first_name_error(),
                            oninput: move |evt: FormEvent| {
                                first_name.set(evt.value());
                                first_name_error.set(None);
                            },
                        }
                        Input {
                            label: "Last name".to_string(),
                            value: last_name(),
                            error: last_name_error(),
                            oninput: move |evt: FormEvent| {
                                last_name.set(evt.value());
                                last_name_error.set(None);
                            },
                        }
                    }
                    TextArea {
                        label: "Bio".to_string(),
                        placeholder: "A couple of lines about yourself",
                        value: bio(),
                        oninput: move |evt: FormEvent| bio.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: updating(),
                            if updating() { "Saving..." } else { "Save changes" }
                        }
                        Button {
                            disabled: updating(),
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: start_editing,
                    "Edit profile"
                }
            }
        }

        AlertModal {
            open: show_success(),
            title: "Profile updated",
            variant: AlertVariant::Success,
            on_close: move |_| show_success.set(false),
        }
    }
}
