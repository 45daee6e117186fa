//! Delete-account modal. Local accounts must pass live password
//! verification AND type DELETE; OAuth accounts have no password on
//! file, so the typed confirmation alone arms the button.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{server_error_message, use_auth, AlertModal, AlertVariant, AuthState, ModalOverlay};

use super::CurrentPasswordInput;

const CONFIRM_WORD: &str = "DELETE";

#[component]
pub fn DeleteAccountModal(
    open: bool,
    requires_password: bool,
    on_close: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let mut password = use_signal(String::new);
    let mut verified = use_signal(|| false);
    let mut confirm_text = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error_message = use_signal(|| Option::<String>::None);

    if !open {
        return rsx! {};
    }

    let delete_enabled =
        (!requires_password || verified()) && confirm_text() == CONFIRM_WORD && !loading();

    let mut reset = move || {
        password.set(String::new());
        verified.set(false);
        confirm_text.set(String::new());
        error_message.set(None);
        loading.set(false);
    };

    let handle_delete = move |_| {
        spawn(async move {
            if confirm_text() != CONFIRM_WORD {
                error_message.set(Some("Type DELETE to confirm".to_string()));
                return;
            }

            loading.set(true);
            match api::delete_account(password()).await {
                Ok(()) => {
                    auth.set(AuthState {
                        user: None,
                        loading: false,
                    });
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                }
                Err(e) => {
                    error_message.set(Some(server_error_message(&e)));
                    loading.set(false);
                }
            }
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
                class: "auth-modal danger-zone",
                h2 { class: "auth-modal-title", "Delete account" }
                p {
                    class: "auth-modal-text",
                    "This permanently removes your account and profile. "
                    "There is no undo."
                }

                if requires_password {
                    CurrentPasswordInput {
                        label: "Password".to_string(),
                        password,
                        verified,
                    }
                }
                Input {
                    label: format!("Type {} to confirm", CONFIRM_WORD),
                    placeholder: CONFIRM_WORD,
                    value: confirm_text(),
                    oninput: move |evt: FormEvent| confirm_text.set(evt.value()),
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: !delete_enabled,
                        onclick: handle_delete,
                        if loading() { "Deleting..." } else { "Delete my account" }
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

        AlertModal {
            open: error_message().is_some(),
            title: error_message().unwrap_or_default(),
            variant: AlertVariant::Error,
            on_close: move |_| error_message.set(None),
        }
    }
}
