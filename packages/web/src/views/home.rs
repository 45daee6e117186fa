//! Marketing landing page with the login/signup/forgot-password modals.

use dioxus::prelude::*;
use ui::{
    ForgotPasswordModal, LoginModal, LogoutButton, Navbar, SignupModal, use_auth,
};
use ui::components::{Button, ButtonVariant};

use crate::Route;

/// Landing page component.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut show_login = use_signal(|| false);
    let mut show_signup = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);

    let logged_in = !auth().loading && auth().user.is_some();

    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "Vitrine" }
            nav {
                class: "nav-links",
                Link { to: Route::Info {}, "About" }
                if logged_in {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    LogoutButton {}
                } else {
                    Button {
                        onclick: move |_| show_login.set(true),
                        "Log in"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_signup.set(true),
                        "Get started"
                    }
                }
            }
        }

        main {
            class: "hero",
            h1 { class: "hero-title", "Show your work the way it deserves" }
            p {
                class: "hero-sub",
                "Vitrine is a launch-ready starter: a polished landing page, "
                "accounts with email or Google sign-in, and a dashboard your "
                "users can make their own."
            }
            div {
                class: "hero-actions",
                if logged_in {
                    Link { class: "btn btn-primary", to: Route::Dashboard {}, "Open your dashboard" }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_signup.set(true),
                        "Create an account"
                    }
                }
                Link { class: "btn btn-secondary", to: Route::Info {}, "Learn more" }
            }
        }

        section {
            class: "features",
            div {
                class: "feature-card",
                h3 { "Sign in, two ways" }
                p { "Email and password with sensible rules, or one click with Google." }
            }
            div {
                class: "feature-card",
                h3 { "A profile that's yours" }
                p { "Names, a bio, an avatar. Edit everything from the dashboard." }
            }
            div {
                class: "feature-card",
                h3 { "Full control" }
                p { "Change your email or password any time, or delete the account outright." }
            }
        }

        footer {
            class: "footer",
            p { "Vitrine — a demo storefront for your next idea." }
        }

        LoginModal {
            open: show_login(),
            on_close: move |_| show_login.set(false),
            on_switch_signup: move |_| {
                show_login.set(false);
                show_signup.set(true);
            },
            on_forgot_password: move |_| {
                show_login.set(false);
                show_forgot.set(true);
            },
        }
        SignupModal {
            open: show_signup(),
            on_close: move |_| show_signup.set(false),
            on_switch_login: move |_| {
                show_signup.set(false);
                show_login.set(true);
            },
        }
        ForgotPasswordModal {
            open: show_forgot(),
            on_close: move |_| show_forgot.set(false),
        }
    }
}
