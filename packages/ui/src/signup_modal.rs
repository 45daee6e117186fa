//! Signup modal: names, email, password with live requirement checklist
//! and strength meter, plus Google OAuth.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState, OAuthButton};
use crate::auth_form::AuthForm;
use crate::components::{Button, ButtonVariant, Input};
use crate::modal::ModalOverlay;
use crate::password_input::{PasswordChecklist, PasswordInput};
use crate::server_error_message;

#[component]
pub fn SignupModal(open: bool, on_close: EventHandler<()>, on_switch_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut form = use_signal(AuthForm::signup);

    if !open {
        return rsx! {};
    }

    let close = move |_| {
        form.write().reset();
        on_close.call(());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if !form.write().validate() {
                return;
            }
            form.write().loading = true;

            let (email, password, first_name, last_name) = {
                let f = form.read();
                (
                    f.email.clone(),
                    f.password.clone(),
                    f.first_name.clone(),
                    f.last_name.clone(),
                )
            };

            match api::register(email, password, first_name, last_name).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    form.write().reset();
                    on_close.call(());
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                }
                Err(e) => {
                    let mut f = form.write();
                    f.loading = false;
                    f.set_general_error(server_error_message(&e));
                }
            }
        });
    };

    let state = form.read().clone();

    rsx! {
        ModalOverlay {
            on_close: close,
            locked: state.loading,
            div {
                class: "auth-modal",
                h2 { class: "auth-modal-title", "Create your account" }

                if let Some(err) = state.error {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "field-row",
                        Input {
                            label: "First name".to_string(),
                            placeholder: "Mary",
                            value: state.first_name,
                            error: state.first_name_error.map(|e| e.to_string()),
                            oninput: move |evt: FormEvent| form.write().set_first_name(evt.value()),
                        }
                        Input {
                            label: "Last name".to_string(),
                            placeholder: "Ann",
                            value: state.last_name,
                            error: state.last_name_error.map(|e| e.to_string()),
                            oninput: move |evt: FormEvent| form.write().set_last_name(evt.value()),
                        }
                    }
                    Input {
                        label: "Email".to_string(),
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: state.email,
                        error: state.email_error.map(|e| e.to_string()),
                        oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                    }
                    PasswordInput {
                        label: "Password".to_string(),
                        value: state.password.clone(),
                        error: state.password_error.map(|e| e.to_string()),
                        show_strength: true,
                        oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                    }
                    if !state.password.is_empty() {
                        PasswordChecklist { password: state.password.clone() }
                    }
                    PasswordInput {
                        label: "Confirm password".to_string(),
                        value: state.confirm_password,
                        error: state.confirm_password_error.map(|e| e.to_string()),
                        oninput: move |evt: FormEvent| form.write().set_confirm_password(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: state.loading,
                        if state.loading { "Creating account..." } else { "Sign up" }
                    }
                }

                div { class: "auth-divider", "or" }

                OAuthButton {
                    provider: "google",
                    label: "Continue with Google",
                    class: "google-btn w-full",
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| {
                            form.write().reset();
                            on_switch_login.call(());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
