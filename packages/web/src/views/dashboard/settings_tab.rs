//! Settings tab: display preferences and account management.

use api::UserInfo;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{AlertModal, AlertVariant};

use super::change_email_modal::ChangeEmailModal;
use super::change_password_modal::ChangePasswordModal;
use super::delete_account_modal::DeleteAccountModal;

#[component]
pub fn SettingsTab(user: UserInfo) -> Element {
    let mut theme = use_signal(|| "light".to_string());
    let mut show_saved = use_signal(|| false);

    let mut show_change_email = use_signal(|| false);
    let mut show_change_password = use_signal(|| false);
    let mut show_delete_account = use_signal(|| false);

    let is_local = user.is_local();
    let email = user.email.clone();

    rsx! {
        section {
            class: "settings-section",
            h2 { "Preferences" }
            div {
                class: "field",
                label { class: "field-label", "Theme" }
                select {
                    class: "input",
                    value: "{theme}",
                    onchange: move |evt| theme.set(evt.value()),
                    option { value: "light", "Light" }
                    option { value: "dark", "Dark (coming soon)" }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                // TODO: persist once a user_preferences table exists
                onclick: move |_| show_saved.set(true),
                "Save preferences"
            }
        }

        section {
            class: "settings-section",
            h2 { "Account" }
            p { class: "muted", "Signed in as {email}" }

            if is_local {
                div {
                    class: "settings-actions",
                    Button {
                        onclick: move |_| show_change_email.set(true),
                        "Change email"
                    }
                    Button {
                        onclick: move |_| show_change_password.set(true),
                        "Change password"
                    }
                }
            } else {
                p { class: "muted", "Email and password are managed by your Google account." }
            }
        }

        section {
            class: "settings-section danger-zone",
            h2 { "Danger zone" }
            p { class: "muted", "Deleting your account removes your profile permanently." }
            Button {
                variant: ButtonVariant::Danger,
                onclick: move |_| show_delete_account.set(true),
                "Delete account"
            }
        }

        AlertModal {
            open: show_saved(),
            title: "Preferences saved",
            variant: AlertVariant::Success,
            on_close: move |_| show_saved.set(false),
        }

        ChangeEmailModal {
            open: show_change_email(),
            current_email: user.email.clone(),
            on_close: move |_| show_change_email.set(false),
        }
        ChangePasswordModal {
            open: show_change_password(),
            on_close: move |_| show_change_password.set(false),
        }
        DeleteAccountModal {
            open: show_delete_account(),
            requires_password: is_local,
            on_close: move |_| show_delete_account.set(false),
        }
    }
}
