//! Password reset page, reached from the link a reset request issues.

use api::validate::{field_error, passwords_match, Field};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{server_error_message, Navbar, PasswordChecklist, PasswordInput};

use crate::Route;

#[component]
pub fn ResetPassword(token: String) -> Element {
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut done = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let token_for_submit = token.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let token = token_for_submit.clone();
        spawn(async move {
            error.set(None);

            if !passwords_match(&new_password(), &confirm_password()) {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if let Some(err) = field_error(Field::Password, &new_password(), None) {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::reset_password(token, new_password()).await {
                Ok(()) => done.set(true),
                Err(e) => error.set(Some(server_error_message(&e))),
            }
            loading.set(false);
        });
    };

    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "Vitrine" }
        }

        main {
            class: "auth-page",
            h1 { "Choose a new password" }

            if done() {
                p {
                    class: "auth-modal-text",
                    "Your password has been updated. You can sign in with it now."
                }
                Link { class: "btn btn-primary", to: Route::Home {}, "Back to sign in" }
            } else {
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
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
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Saving..." } else { "Set new password" }
                    }
                }
            }
        }
    }
}
