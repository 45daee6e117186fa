//! Change-password modal. The current password is verified live; the new
//! one must pass the same policy as signup.

use api::validate::{field_error, passwords_match, Field};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{
    server_error_message, AlertModal, AlertVariant, ModalOverlay, PasswordChecklist, PasswordInput,
};

use super::CurrentPasswordInput;

#[component]
pub fn ChangePasswordModal(open: bool, on_close: EventHandler<()>) -> Element {
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut verified = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut show_success = use_signal(|| false);
    let mut error_message = use_signal(|| Option::<String>::None);

    if !open {
        return rsx! {};
    }

    let mut reset = move || {
        current_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
        verified.set(false);
        error_message.set(None);
        loading.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if !passwords_match(&new_password(), &confirm_password()) {
                error_message.set(Some("Passwords do not match".to_string()));
                return;
            }
            // Same policy as signup
            if let Some(err) = field_error(Field::Password, &new_password(), None) {
                error_message.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::change_password(current_password(), new_password()).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
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
                h2 { class: "auth-modal-title", "Change password" }

                form {
                    onsubmit: handle_submit,
                    CurrentPasswordInput {
                        label: "Current password".to_string(),
                        password: current_password,
                        verified,
                    }
                    PasswordInput {
                        label: "New password".to_string(),
                        value: new_password(),
                        show_strength: true,
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                    if !new_password().is_empty() {
                        PasswordChecklist { password: new_password() }
                    }
                    PasswordInput {
                        label: "Confirm new password".to_string(),
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "..." } else { "Update password" }
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
            title: "Password updated",
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
