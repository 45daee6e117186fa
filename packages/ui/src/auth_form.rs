//! # Shared auth form state
//!
//! One state struct drives both the login and signup modals: field
//! values, a per-field error slot, a general (server) error, and the
//! submit-in-flight flag. Editing a field clears that field's error;
//! [`AuthForm::validate`] refills them all and reports whether the form
//! may be submitted.
//!
//! The struct is plain data so the validation flow can be unit tested
//! without a renderer; components wrap it in a `Signal`.

use api::validate::{field_error, Field, ValidationError};

/// Form state for the login/signup modals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_error: Option<ValidationError>,
    pub password_error: Option<ValidationError>,
    pub confirm_password_error: Option<ValidationError>,
    pub first_name_error: Option<ValidationError>,
    pub last_name_error: Option<ValidationError>,
    pub loading: bool,
    pub error: Option<String>,
    require_confirm_password: bool,
    require_names: bool,
}

impl AuthForm {
    /// Login: email + password only.
    pub fn login() -> Self {
        Self::default()
    }

    /// Signup: names and password confirmation required too.
    pub fn signup() -> Self {
        Self {
            require_confirm_password: true,
            require_names: true,
            ..Self::default()
        }
    }

    /// Validate every enabled field, filling the per-field error slots.
    /// Returns true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.clear_errors();

        if self.require_names {
            self.first_name_error = field_error(Field::FirstName, &self.first_name, None);
            self.last_name_error = field_error(Field::LastName, &self.last_name, None);
        }
        self.email_error = field_error(Field::Email, &self.email, None);
        self.password_error = field_error(Field::Password, &self.password, None);
        if self.require_confirm_password {
            self.confirm_password_error = field_error(
                Field::ConfirmPassword,
                &self.confirm_password,
                Some(&self.password),
            );
        }

        self.email_error.is_none()
            && self.password_error.is_none()
            && self.confirm_password_error.is_none()
            && self.first_name_error.is_none()
            && self.last_name_error.is_none()
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.email_error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.password_error = None;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.confirm_password_error = None;
    }

    pub fn set_first_name(&mut self, value: String) {
        self.first_name = value;
        self.first_name_error = None;
    }

    pub fn set_last_name(&mut self, value: String) {
        self.last_name = value;
        self.last_name_error = None;
    }

    /// Record a non-field error (server rejection, network failure).
    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn clear_errors(&mut self) {
        self.email_error = None;
        self.password_error = None;
        self.confirm_password_error = None;
        self.first_name_error = None;
        self.last_name_error = None;
        self.error = None;
    }

    /// Clear all fields and errors, keeping the form's configuration.
    pub fn reset(&mut self) {
        *self = Self {
            require_confirm_password: self.require_confirm_password,
            require_names: self.require_names,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_ignores_name_fields() {
        let mut form = AuthForm::login();
        form.set_email("user@example.com".to_string());
        form.set_password("Password123".to_string());
        assert!(form.validate());
        assert_eq!(form.first_name_error, None);
    }

    #[test]
    fn test_signup_form_requires_everything() {
        let mut form = AuthForm::signup();
        form.set_email("user@example.com".to_string());
        form.set_password("Password123".to_string());
        assert!(!form.validate());
        assert_eq!(form.first_name_error, Some(ValidationError::Required));
        assert_eq!(form.confirm_password_error, Some(ValidationError::Required));

        form.set_first_name("Mary".to_string());
        form.set_last_name("Ann".to_string());
        form.set_confirm_password("Password123".to_string());
        assert!(form.validate());
    }

    #[test]
    fn test_mismatched_confirmation_fails() {
        let mut form = AuthForm::signup();
        form.set_email("user@example.com".to_string());
        form.set_first_name("Mary".to_string());
        form.set_last_name("Ann".to_string());
        form.set_password("Password123".to_string());
        form.set_confirm_password("Password124".to_string());
        assert!(!form.validate());
        assert_eq!(
            form.confirm_password_error,
            Some(ValidationError::PasswordsDontMatch)
        );
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = AuthForm::login();
        form.validate();
        assert_eq!(form.email_error, Some(ValidationError::Required));
        form.set_email("user@example.com".to_string());
        assert_eq!(form.email_error, None);
    }

    #[test]
    fn test_validate_clears_stale_general_error() {
        let mut form = AuthForm::login();
        form.set_general_error("Invalid email or password");
        form.set_email("user@example.com".to_string());
        form.set_password("Password123".to_string());
        assert!(form.validate());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut form = AuthForm::signup();
        form.set_email("user@example.com".to_string());
        form.loading = true;
        form.reset();
        assert_eq!(form.email, "");
        assert!(!form.loading);
        // Still a signup form: confirmation is required again
        form.set_email("user@example.com".to_string());
        form.set_password("Password123".to_string());
        assert!(!form.validate());
    }
}
