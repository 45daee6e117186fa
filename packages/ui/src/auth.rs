//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    // Re-check the session every 30s (expiry, logout in another tab)
    use_effect(move || {
        spawn(async move {
            loop {
                crate::sleep(std::time::Duration::from_secs(30)).await;

                // Don't check while initial load is still in progress
                if auth_state().loading {
                    continue;
                }
                if let Ok(user) = api::get_current_user().await {
                    if auth_state().user != user {
                        auth_state.set(AuthState {
                            user,
                            loading: false,
                        });
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to initiate login with an OAuth provider.
#[component]
pub fn OAuthButton(
    provider: String,
    #[props(default = "Continue".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let provider_clone = provider.clone();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        let provider = provider_clone.clone();
        async move {
            loading.set(true);
            match api::get_login_url(provider).await {
                Ok(url) => {
                    // Redirect to the OAuth provider
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        tracing::info!("open {} in a browser to continue", url);
                        loading.set(false);
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to get login URL: {}", e);
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        button {
            class: "btn oauth-btn {class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Loading..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
            // Back to the landing page
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    };

    rsx! {
        button {
            class: "btn {class}",
            onclick: onclick,
            "{label}"
        }
    }
}
