//! Forgot-password modal. Submits a reset request and shows a neutral
//! confirmation either way, so it reveals nothing about which emails
//! have accounts.

use api::validate::{field_error, Field};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::modal::ModalOverlay;
use crate::server_error_message;

#[component]
pub fn ForgotPasswordModal(open: bool, on_close: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !open {
        return rsx! {};
    }

    let mut reset = move || {
        email.set(String::new());
        email_error.set(None);
        error.set(None);
        sent.set(false);
        loading.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if let Some(err) = field_error(Field::Email, &email(), None) {
                email_error.set(Some(err.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);

            match api::request_password_reset(email()).await {
                Ok(()) => sent.set(true),
                Err(e) => error.set(Some(server_error_message(&e))),
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
                h2 { class: "auth-modal-title", "Reset your password" }

                if sent() {
                    p {
                        class: "auth-modal-text",
                        "If an account exists for that address, a reset link is on its way. Check your inbox."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        onclick: move |_| {
                            reset();
                            on_close.call(());
                        },
                        "Done"
                    }
                } else {
                    p {
                        class: "auth-modal-text",
                        "Enter your email and we'll send you a link to set a new password."
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    form {
                        onsubmit: handle_submit,
                        Input {
                            label: "Email".to_string(),
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            error: email_error(),
                            oninput: move |evt: FormEvent| {
                                email.set(evt.value());
                                email_error.set(None);
                            },
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "w-full",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Sending..." } else { "Send reset link" }
                        }
                    }
                }
            }
        }
    }
}
