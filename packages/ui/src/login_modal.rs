//! Login modal: email/password plus Google OAuth.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState, OAuthButton};
use crate::auth_form::AuthForm;
use crate::components::{Button, ButtonVariant, Input};
use crate::modal::ModalOverlay;
use crate::password_input::PasswordInput;
use crate::server_error_message;

#[component]
pub fn LoginModal(
    open: bool,
    on_close: EventHandler<()>,
    on_switch_signup: EventHandler<()>,
    on_forgot_password: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let mut form = use_signal(AuthForm::login);

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

            let (email, password) = {
                let f = form.read();
                (f.email.clone(), f.password.clone())
            };

            match api::login_password(email, password).await {
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
                h2 { class: "auth-modal-title", "Welcome back" }

                if let Some(err) = state.error {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
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
                        value: state.password,
                        error: state.password_error.map(|e| e.to_string()),
                        oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| {
                            form.write().reset();
                            on_forgot_password.call(());
                        },
                        "Forgot your password?"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: state.loading,
                        if state.loading { "Signing in..." } else { "Sign in" }
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
                    "Don't have an account? "
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| {
                            form.write().reset();
                            on_switch_signup.call(());
                        },
                        "Sign up"
                    }
                }
            }
        }
    }
}
