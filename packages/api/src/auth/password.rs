//! # Password hashing and verification — Argon2id
//!
//! The two functions used by the local (email + password) authentication
//! path:
//!
//! - [`hash_password`] — random [`OsRng`] salt, default Argon2id
//!   parameters, PHC-format output (`$argon2id$v=19$...`). The string is
//!   stored in the `password_hash` column of the `users` table.
//! - [`verify_password`] — parses a stored PHC string and checks the
//!   plaintext against it. `Ok(true)` on match, `Ok(false)` on mismatch,
//!   `Err` if the stored hash is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("Password123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Password123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("Password123").unwrap();
        assert!(!verify_password("Password124", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("Password123").unwrap();
        let b = hash_password("Password123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("Password123", "not-a-phc-string").is_err());
    }
}
