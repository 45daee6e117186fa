//! Static about/info page.

use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn Info() -> Element {
    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "Vitrine" }
            nav {
                class: "nav-links",
                Link { to: Route::Home {}, "Home" }
            }
        }

        main {
            class: "info",
            h1 { "About Vitrine" }
            p {
                "Vitrine is a small demo application: a public landing page in "
                "front, a private dashboard behind a login. It exists to show a "
                "complete account lifecycle end to end."
            }
            h2 { "What's inside" }
            ul {
                li { "Email/password accounts with Argon2 password hashing" }
                li { "Google sign-in via the OAuth authorization-code flow with PKCE" }
                li { "Cookie sessions stored in Postgres, expiring after a week of inactivity" }
                li { "A profile you can edit, and account settings for email, password, and deletion" }
            }
            p {
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back to the start" }
            }
        }
    }
}
