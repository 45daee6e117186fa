//! Session data types.
//!
//! Sessions themselves live in a tower-sessions cookie session backed by
//! Postgres; the only application-level state stored in them is the
//! authenticated user's id under this key.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
