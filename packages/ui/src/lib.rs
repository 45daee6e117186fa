//! This crate contains all shared UI for the workspace.

use dioxus::prelude::ServerFnError;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, OAuthButton};

mod auth_form;
pub use auth_form::AuthForm;

mod modal;
pub use modal::{AlertModal, AlertVariant, ModalOverlay};

mod password_input;
pub use password_input::{PasswordChecklist, PasswordInput, StrengthMeter};

mod login_modal;
pub use login_modal::LoginModal;

mod signup_modal;
pub use signup_modal::SignupModal;

mod forgot_password_modal;
pub use forgot_password_modal::ForgotPasswordModal;

mod navbar;
pub use navbar::Navbar;

/// User-facing message from a server function error, without the
/// transport prefix `ServerFnError`'s Display adds.
pub fn server_error_message(err: &ServerFnError) -> String {
    if let ServerFnError::ServerError(msg) = err {
        msg.clone()
    } else {
        err.to_string()
    }
}

/// Platform sleep used for input debouncing and polling.
pub async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
