//! # Form validation predicates
//!
//! Pure checks shared by the browser UI (live field validation) and the
//! server functions (authoritative re-validation before touching the
//! database). Nothing here relies on client-side validation alone.
//!
//! The rules:
//!
//! - **email** — `local@domain.tld` shape: exactly one `@`, no whitespace,
//!   and an interior dot in the domain part.
//! - **name** — at least 2 characters, letters and spaces only (the
//!   accented set `áéíóúÁÉÍÓÚñÑ` is allowed for compound Spanish names).
//! - **password** — at least 8 characters with an uppercase letter and a
//!   digit. Special characters are reported but not required.

use thiserror::Error;

/// Characters the password rules count as "special".
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Letters allowed in names beyond plain ASCII.
const NAME_EXTRA: &str = "áéíóúÁÉÍÓÚñÑ";

/// First failing rule for a form field. Display strings double as the
/// user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name may only contain letters and spaces")]
    InvalidName,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain an uppercase letter")]
    PasswordNoUppercase,
    #[error("Password must contain a number")]
    PasswordNoDigit,
    #[error("Passwords do not match")]
    PasswordsDontMatch,
}

/// Form fields that [`field_error`] knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
}

/// Non-empty after trimming.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `local@domain.tld` shape. The domain must contain a dot that is
/// neither its first nor its last character.
pub fn email(value: &str) -> bool {
    if !required(value) || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(pos, _)| pos >= 1 && pos + 1 < domain.len())
}

/// At least 2 characters, letters and whitespace only.
pub fn name(value: &str) -> bool {
    if !required(value) || value.trim().chars().count() < 2 {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || NAME_EXTRA.contains(c) || c.is_whitespace())
}

pub fn password_min_length(password: &str, min: usize) -> bool {
    password.chars().count() >= min
}

pub fn password_has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn password_has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn password_has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Per-rule results for a password, used by the signup checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordChecks {
    /// Minimum length, uppercase, and digit. Special characters improve
    /// the strength score but are not mandatory.
    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_digit
    }
}

pub fn password_checks(password: &str) -> PasswordChecks {
    PasswordChecks {
        has_min_length: password_min_length(password, 8),
        has_uppercase: password_has_uppercase(password),
        has_digit: password_has_digit(password),
        has_special: password_has_special(password),
    }
}

/// Equal and non-empty.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm && !password.is_empty()
}

/// First failing rule for `field`, or `None` when the value is valid.
/// `compare` carries the original password when validating the
/// confirmation field.
pub fn field_error(field: Field, value: &str, compare: Option<&str>) -> Option<ValidationError> {
    match field {
        Field::Email => {
            if !required(value) {
                Some(ValidationError::Required)
            } else if !email(value) {
                Some(ValidationError::InvalidEmail)
            } else {
                None
            }
        }
        Field::FirstName | Field::LastName => {
            if !required(value) {
                Some(ValidationError::Required)
            } else if value.trim().chars().count() < 2 {
                Some(ValidationError::NameTooShort)
            } else if !name(value) {
                Some(ValidationError::InvalidName)
            } else {
                None
            }
        }
        Field::Password => {
            if !required(value) {
                Some(ValidationError::Required)
            } else if !password_min_length(value, 8) {
                Some(ValidationError::PasswordTooShort)
            } else if !password_has_uppercase(value) {
                Some(ValidationError::PasswordNoUppercase)
            } else if !password_has_digit(value) {
                Some(ValidationError::PasswordNoDigit)
            } else {
                None
            }
        }
        Field::ConfirmPassword => {
            if !required(value) {
                Some(ValidationError::Required)
            } else if compare.is_some_and(|p| !passwords_match(p, value)) {
                Some(ValidationError::PasswordsDontMatch)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_shapes() {
        assert!(email("user@example.com"));
        assert!(email("test.user@domain.co.uk"));
        assert!(email("name+tag@example.com"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!email("invalid"));
        assert!(!email("no@domain"));
        assert!(!email("@example.com"));
        assert!(!email("user@"));
        assert!(!email("user@.com"));
        assert!(!email("two@at@example.com"));
        assert!(!email("spa ce@example.com"));
        assert!(!email(""));
    }

    #[test]
    fn test_name_rules() {
        assert!(name("John"));
        assert!(name("Mary Ann"));
        assert!(name("Peñalosa"));
        assert!(!name("J"));
        assert!(!name("R2D2"));
        assert!(!name("  "));
    }

    #[test]
    fn test_password_checks_valid_passwords() {
        assert!(password_checks("Password123").is_valid());
        assert!(password_checks("MyP@ssw0rd").is_valid());
        assert!(password_checks("Secure123!").is_valid());
    }

    #[test]
    fn test_password_checks_flags_each_rule() {
        assert!(!password_checks("Pass1").has_min_length);
        assert!(!password_checks("password123").has_uppercase);
        assert!(!password_checks("MyPassword").has_digit);
        assert!(!password_checks("").is_valid());
        assert!(password_checks("Password123!").has_special);
        assert!(!password_checks("Password123").has_special);
    }

    #[test]
    fn test_passwords_match_requires_non_empty() {
        assert!(passwords_match("Password123", "Password123"));
        assert!(!passwords_match("Password123", "Password124"));
        assert!(!passwords_match("", ""));
    }

    #[test]
    fn test_field_error_email() {
        assert_eq!(field_error(Field::Email, "user@example.com", None), None);
        assert_eq!(
            field_error(Field::Email, "invalid-email", None),
            Some(ValidationError::InvalidEmail)
        );
        assert_eq!(
            field_error(Field::Email, "", None),
            Some(ValidationError::Required)
        );
    }

    #[test]
    fn test_field_error_password_reports_first_failure() {
        assert_eq!(field_error(Field::Password, "Password123", None), None);
        assert_eq!(
            field_error(Field::Password, "short", None),
            Some(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            field_error(Field::Password, "password123", None),
            Some(ValidationError::PasswordNoUppercase)
        );
        assert_eq!(
            field_error(Field::Password, "Passwordxx", None),
            Some(ValidationError::PasswordNoDigit)
        );
    }

    #[test]
    fn test_field_error_names() {
        assert_eq!(field_error(Field::FirstName, "John", None), None);
        assert_eq!(
            field_error(Field::FirstName, "J", None),
            Some(ValidationError::NameTooShort)
        );
        assert_eq!(
            field_error(Field::LastName, "Sm1th", None),
            Some(ValidationError::InvalidName)
        );
    }

    #[test]
    fn test_field_error_confirm_password() {
        assert_eq!(
            field_error(Field::ConfirmPassword, "Password123", Some("Password123")),
            None
        );
        assert_eq!(
            field_error(Field::ConfirmPassword, "Password124", Some("Password123")),
            Some(ValidationError::PasswordsDontMatch)
        );
        assert_eq!(
            field_error(Field::ConfirmPassword, "", Some("Password123")),
            Some(ValidationError::Required)
        );
    }
}
