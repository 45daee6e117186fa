//! # Profile model
//!
//! The profile row holds display attributes (names, bio, avatar) and is
//! distinct from the identity record. One row per user, created together
//! with the account and cascade-deleted with it.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Profile {
    /// Convert to ProfileInfo for client consumption.
    pub fn to_info(&self) -> ProfileInfo {
        ProfileInfo {
            id: self.id.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// Profile fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Editable profile fields sent by the dashboard's profile form.
/// An empty bio clears the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
