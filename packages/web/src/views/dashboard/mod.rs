//! Protected dashboard: profile editing and account settings.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar, PasswordInput};

use crate::Route;

mod change_email_modal;
mod change_password_modal;
mod delete_account_modal;
mod profile_tab;
mod settings_tab;

use profile_tab::ProfileTab;
use settings_tab::SettingsTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Settings,
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut active_tab = use_signal(|| Tab::Profile);

    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    // Not logged in: back to the landing page
    let Some(user) = state.user else {
        nav.replace(Route::Home {});
        return rsx! {};
    };

    let display_name = user.display_name().to_string();
    let profile_class = if active_tab() == Tab::Profile { "tab-btn active" } else { "tab-btn" };
    let settings_class = if active_tab() == Tab::Settings { "tab-btn active" } else { "tab-btn" };

    let tab_content = match active_tab() {
        Tab::Profile => rsx! { ProfileTab {} },
        Tab::Settings => rsx! { SettingsTab { user: user.clone() } },
    };

    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "Vitrine" }
            nav {
                class: "nav-links",
                Link { to: Route::Home {}, "Home" }
                LogoutButton {}
            }
        }

        main {
            class: "dashboard",
            h1 { class: "dashboard-title", "Welcome, {display_name}" }

            div {
                class: "dashboard-tabs",
                button {
                    class: "{profile_class}",
                    onclick: move |_| active_tab.set(Tab::Profile),
                    "Profile"
                }
                button {
                    class: "{settings_class}",
                    onclick: move |_| active_tab.set(Tab::Settings),
                    "Settings"
                }
            }

            {tab_content}
        }
    }
}

/// Current-password field with debounced live verification (500 ms),
/// shown in the change-email, change-password, and delete-account
/// modals. The original check only fires once the password could
/// plausibly be complete (6+ characters).
#[component]
pub(crate) fn CurrentPasswordInput(
    label: String,
    password: Signal<String>,
    verified: Signal<bool>,
) -> Element {
    let mut seq = use_signal(|| 0u32);

    let hint = if password().chars().count() >= 6 {
        Some(if verified() {
            ("verify-hint ok", "✓ Password verified")
        } else {
            ("verify-hint bad", "✗ Incorrect password")
        })
    } else {
        None
    };

    rsx! {
        div {
            PasswordInput {
                label,
                value: password(),
                oninput: move |evt: FormEvent| {
                    password.set(evt.value());
                    let my_seq = seq() + 1;
                    seq.set(my_seq);
                    spawn(async move {
                        ui::sleep(std::time::Duration::from_millis(500)).await;
                        // A newer keystroke owns the check now
                        if seq() != my_seq {
                            return;
                        }
                        if password().chars().count() < 6 {
                            verified.set(false);
                            return;
                        }
                        let ok = api::verify_current_password(password())
                            .await
                            .unwrap_or(false);
                        verified.set(ok);
                    });
                },
            }
            if let Some((class, text)) = hint {
                p { class: "{class}", "{text}" }
            }
        }
    }
}
