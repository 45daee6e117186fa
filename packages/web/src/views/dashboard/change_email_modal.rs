//! Change-email modal with live password confirmation.

use api::validate::{field_error, Field};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{server_error_message, use_auth, AlertModal, AlertVariant, AuthState, ModalOverlay};

use super::CurrentPasswordInput;

#[component]
pub fn ChangeEmailModal(open: bool, current_email: String, on_close: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut new_email = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password = use_signal(String::new);
    let mut verified = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut show_success = use_signal(|| false);
    let mut error_message = use_signal(|| Option::<String>::None);

    if !open {
        return rsx! {};
    }

    let mut reset = move || {
        new_email.set(String::new());
        email_error.set(None);
        password.set(String::new());
        verified.set(false);
        error_message.set(None);
        loading.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if let Some(err) = field_error(Field::Email, &new_email(), None) {
                email_error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::change_email(password(), new_email()).await {
                Ok(user) => {
                    // The session user changed; reflect it everywhere
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    new_email.set(String::new());
                    password.set(String::new());
                    verified.set(false);
                    show_success.set(true);
                }
                Err(e) => error_message.set(Some(server_error_message(&e))),
            }
            loading.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                reset();
                on_close.call(());
            },
            locked: loading(),
            div {
                class: "auth-modal",
                h2 { class: "auth-modal-title", "Change email" }
                p { class: "muted", "Current address: {current_email}" }

                form {
                    onsubmit: handle_submit,
                    Input {
                        label: "New email".to_string(),
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: new_email(),
                        error: email_error(),
                        oninput: move |evt: FormEvent| {
                            new_email.set(evt.value());
                            email_error.set(None);
                        },
                    }
                    CurrentPasswordInput {
                        label: "Password".to_string(),
                        password,
                        verified,
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "..." } else { "Update email" }
                        }
                        Button {
                            disabled: loading(),
                            onclick: move |_| {
                                reset();
                                on_close.call(());
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }

        AlertModal {
            open: show_success(),
            title: "Email updated",
            variant: AlertVariant::Success,
            on_close: move |_| {
                show_success.set(false);
                reset();
                on_close.call(());
            },
        }

        AlertModal {
            open: error_message().is_some(),
            title: error_message().unwrap_or_default(),
            variant: AlertVariant::Error,
            on_close: move |_| error_message.set(None),
        }
    }
}
