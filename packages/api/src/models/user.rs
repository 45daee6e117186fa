//! # User identity model
//!
//! Two representations of an account:
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, derived with [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `display_name`, `avatar_url` — populated at registration or
//!   refreshed on each OAuth login.
//! - `provider` / `provider_id` — `"google"` with the provider's user id,
//!   or `"local"` for email+password accounts where `provider_id` equals
//!   the email.
//! - `password_hash` — Argon2 PHC string, present only for `"local"`
//!   accounts.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! ## [`UserInfo`]
//!
//! The client-safe subset that crosses the server/client boundary via
//! server functions. It omits the password hash and timestamps and
//! carries the id as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            provider: self.provider.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }

    /// Whether this account authenticates with a password.
    pub fn is_local(&self) -> bool {
        self.provider == "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(display_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "3e2cde8e-0000-0000-0000-000000000000".to_string(),
            email: "user@example.com".to_string(),
            display_name: display_name.map(str::to_string),
            avatar_url: None,
            provider: "local".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(info(Some("Mary Ann")).display_name(), "Mary Ann");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(info(None).display_name(), "user@example.com");
    }

    #[test]
    fn test_is_local() {
        assert!(info(None).is_local());
        let mut oauth = info(None);
        oauth.provider = "google".to_string();
        assert!(!oauth.is_local());
    }
}
