//! # API crate — shared fullstack server functions for Vitrine
//!
//! This crate is the backbone of the fullstack architecture. It defines
//! every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Google OAuth, local password authentication, session key, password hashing |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database models (`User`, `Profile`) and their client-safe projections |
//! | [`strength`] | — | Password strength scoring for the signup meter |
//! | [`validate`] | — | Pure form validation predicates shared with the UI |
//!
//! ## Server functions exposed here
//!
//! Every `#[server]` function below compiles twice: full logic for the
//! server build, a thin HTTP stub for the client build.
//!
//! - **Authentication**: `get_current_user`, `get_login_url`, `logout`,
//!   `register`, `login_password`
//! - **Account settings**: `verify_current_password`, `change_password`,
//!   `change_email`, `delete_account`
//! - **Password reset**: `request_password_reset`, `reset_password`
//! - **Profile**: `get_profile`, `update_profile`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod strength;
pub mod validate;

pub use models::{ProfileInfo, ProfileUpdate, UserInfo};

/// Resolve the session to a user id, if anyone is logged in.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<uuid::Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match user_id {
        Some(id) => Ok(Some(
            uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?,
        )),
        None => Ok(None),
    }
}

/// Resolve the session to the full user row, erroring when nobody is
/// logged in. Settings operations all start here.
#[cfg(feature = "server")]
async fn session_user(
    session: &tower_sessions::Session,
) -> Result<models::User, ServerFnError> {
    use crate::db::get_pool;

    let Some(user_id) = session_user_id(session).await? else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Get the current authenticated user from the session.
#[server]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let session: tower_sessions::Session = extract().await?;

    let Some(user_id) = session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

/// Get the OAuth login URL for a provider.
#[server]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    match provider.as_str() {
        "google" => {
            let oauth = auth::GoogleOAuth::new().map_err(ServerFnError::new)?;
            let (url, _, _) = oauth
                .generate_auth_url()
                .await
                .map_err(ServerFnError::new)?;
            Ok(url)
        }
        _ => Err(ServerFnError::new(format!("Unknown provider: {}", provider))),
    }
}

/// Log out the current user by clearing the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract().await?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Register a new user with email, password, and names.
#[server]
pub async fn register(
    email: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::validate::{field_error, Field};

    let email = email.trim().to_lowercase();
    let first_name = first_name.trim().to_string();
    let last_name = last_name.trim().to_string();

    for (field, value) in [
        (Field::Email, email.as_str()),
        (Field::Password, password.as_str()),
        (Field::FirstName, first_name.as_str()),
        (Field::LastName, last_name.as_str()),
    ] {
        if let Some(err) = field_error(field, value, None) {
            return Err(ServerFnError::new(err.to_string()));
        }
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE provider = 'local' AND provider_id = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;
    let display_name = format!("{} {}", first_name, last_name);

    // User and profile land together or not at all
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, display_name, provider, provider_id, password_hash) \
         VALUES ($1, $2, 'local', $1, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&display_name)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO profiles (id, first_name, last_name) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(&first_name)
        .bind(&last_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let session: tower_sessions::Session = extract().await?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

/// Log in with email and password.
#[server]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> =
        sqlx::query_as("SELECT * FROM users WHERE provider = 'local' AND provider_id = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    // One message for unknown user, OAuth-only account, and bad password
    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    let session: tower_sessions::Session = extract().await?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

/// Check the current user's password without changing anything. Backs the
/// live "password verified" indicator in the settings modals.
#[server]
pub async fn verify_current_password(password: String) -> Result<bool, ServerFnError> {
    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    let Some(ref hash) = user.password_hash else {
        return Ok(false);
    };

    auth::verify_password(&password, hash).map_err(ServerFnError::new)
}

/// Change the current user's password after verifying the current one.
#[server]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use crate::validate::{field_error, Field};

    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new(
            "Password sign-in is not enabled for this account",
        ));
    };

    let valid = auth::verify_password(&current_password, hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Current password is incorrect"));
    }

    // New password obeys the same policy as signup
    if let Some(err) = field_error(Field::Password, &new_password, None) {
        return Err(ServerFnError::new(err.to_string()));
    }

    let password_hash = auth::hash_password(&new_password).map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
        .bind(&password_hash)
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Change the current user's email after verifying their password.
#[server]
pub async fn change_email(password: String, new_email: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::validate::{field_error, Field};

    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new(
            "Password sign-in is not enabled for this account",
        ));
    };

    let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Current password is incorrect"));
    }

    let new_email = new_email.trim().to_lowercase();
    if let Some(err) = field_error(Field::Email, &new_email, None) {
        return Err(ServerFnError::new(err.to_string()));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let taken: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 as n FROM users WHERE provider = 'local' AND provider_id = $1 AND id <> $2",
    )
    .bind(&new_email)
    .bind(user.id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if taken.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    // Local accounts key on their email, so provider_id moves with it
    let updated: models::User = sqlx::query_as(
        "UPDATE users SET email = $1, provider_id = $1, updated_at = NOW() \
         WHERE id = $2 RETURNING *",
    )
    .bind(&new_email)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

/// Permanently delete the current user's account. Local accounts must
/// present their password; OAuth accounts rely on the typed confirmation
/// the UI requires. The profile row goes with the user via cascade.
#[server]
pub async fn delete_account(password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    if let Some(ref hash) = user.password_hash {
        let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;
        if !valid {
            return Err(ServerFnError::new("Current password is incorrect"));
        }
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Issue a single-use password reset token. Always succeeds so the
/// endpoint cannot be used to probe which emails have accounts. Mail
/// delivery is out of scope; the link is logged for the operator.
#[server]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM users WHERE provider = 'local' AND provider_id = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((user_id,)) = user else {
        return Ok(());
    };

    let token = uuid::Uuid::new_v4().to_string();

    sqlx::query(
        "INSERT INTO password_resets (token, user_id, expires_at) \
         VALUES ($1, $2, NOW() + INTERVAL '1 hour')",
    )
    .bind(&token)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(email = %email, "password reset requested: /reset-password/{}", token);

    Ok(())
}

/// Redeem a reset token and set a new password. The token row is
/// consumed atomically, expiry checked in the same query.
#[server]
pub async fn reset_password(token: String, new_password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use crate::validate::{field_error, Field};

    if let Some(err) = field_error(Field::Password, &new_password, None) {
        return Err(ServerFnError::new(err.to_string()));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(uuid::Uuid,)> = sqlx::query_as(
        "DELETE FROM password_resets WHERE token = $1 AND expires_at > NOW() RETURNING user_id",
    )
    .bind(&token)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((user_id,)) = row else {
        return Err(ServerFnError::new("Invalid or expired reset link"));
    };

    let password_hash = auth::hash_password(&new_password).map_err(ServerFnError::new)?;

    sqlx::query(
        "UPDATE users SET password_hash = $1, updated_at = NOW() \
         WHERE id = $2 AND provider = 'local'",
    )
    .bind(&password_hash)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Get the current user's profile.
#[server]
pub async fn get_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
        .bind(user.id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.map(|p| p.to_info()))
}

/// Update the current user's profile fields.
#[server]
pub async fn update_profile(update: ProfileUpdate) -> Result<ProfileInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;
    use crate::validate::{field_error, Field};

    let session: tower_sessions::Session = extract().await?;
    let user = session_user(&session).await?;

    let first_name = update.first_name.trim().to_string();
    let last_name = update.last_name.trim().to_string();
    let bio = update.bio.map(|b| b.trim().to_string()).filter(|b| !b.is_empty());

    for (field, value) in [
        (Field::FirstName, first_name.as_str()),
        (Field::LastName, last_name.as_str()),
    ] {
        if let Some(err) = field_error(field, value, None) {
            return Err(ServerFnError::new(err.to_string()));
        }
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Upsert covers accounts created before the profiles table existed
    let profile: Profile = sqlx::query_as(
        "INSERT INTO profiles (id, first_name, last_name, bio, avatar_url) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (id) DO UPDATE SET \
            first_name = EXCLUDED.first_name, \
            last_name = EXCLUDED.last_name, \
            bio = EXCLUDED.bio, \
            avatar_url = COALESCE(EXCLUDED.avatar_url, profiles.avatar_url), \
            updated_at = NOW() \
         RETURNING *",
    )
    .bind(user.id)
    .bind(&first_name)
    .bind(&last_name)
    .bind(&bio)
    .bind(&update.avatar_url)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.to_info())
}
