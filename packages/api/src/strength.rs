//! # Password strength heuristic
//!
//! A linear point score backing the signup strength meter. Length earns
//! up to 40 points (8/12/16 character thresholds), character variety the
//! rest; the total is capped at 100 and bucketed into three levels.
//! Feedback hints reuse the [`ValidationError`] display strings so the
//! meter and the field errors never disagree.

use crate::validate::{
    password_has_digit, password_has_special, password_has_uppercase, ValidationError,
};

/// Strength bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            StrengthLevel::Weak
        } else if score < 70 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }

    /// CSS modifier class for the meter bar and label.
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// Full strength report for a candidate password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrength {
    pub level: StrengthLevel,
    pub score: u8,
    pub feedback: Vec<ValidationError>,
}

fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let mut score = 0u32;

    if len >= 8 {
        score += 20;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password_has_uppercase(password) {
        score += 15;
    }
    if password_has_digit(password) {
        score += 15;
    }
    if password_has_special(password) {
        score += 20;
    }

    score.min(100) as u8
}

fn feedback(password: &str) -> Vec<ValidationError> {
    let mut feedback = Vec::new();
    if password.chars().count() < 8 {
        feedback.push(ValidationError::PasswordTooShort);
    }
    if !password_has_uppercase(password) {
        feedback.push(ValidationError::PasswordNoUppercase);
    }
    if !password_has_digit(password) {
        feedback.push(ValidationError::PasswordNoDigit);
    }
    feedback
}

/// Score, bucket, and improvement hints for `password`.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            level: StrengthLevel::Weak,
            score: 0,
            feedback: vec![ValidationError::Required],
        };
    }

    let score = score(password);
    PasswordStrength {
        level: StrengthLevel::from_score(score),
        score,
        feedback: feedback(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_weak_with_zero_score() {
        let result = password_strength("");
        assert_eq!(result.level, StrengthLevel::Weak);
        assert_eq!(result.score, 0);
        assert!(result.feedback.contains(&ValidationError::Required));
    }

    #[test]
    fn test_short_password_is_weak() {
        let result = password_strength("abc");
        assert_eq!(result.level, StrengthLevel::Weak);
        assert!(result.score < 40);
    }

    #[test]
    fn test_basic_password_is_medium() {
        let result = password_strength("password1");
        assert_eq!(result.level, StrengthLevel::Medium);
        assert!(result.score >= 40 && result.score < 70);
    }

    #[test]
    fn test_full_variety_is_strong() {
        let result = password_strength("MyP@ssw0rd123!");
        assert_eq!(result.level, StrengthLevel::Strong);
        assert!(result.score >= 70);
    }

    #[test]
    fn test_score_increases_with_length() {
        let short = password_strength("Ab1!");
        let medium = password_strength("Ab1!Ab1!Ab1!");
        let long = password_strength("Ab1!Ab1!Ab1!Ab1!");
        assert!(medium.score > short.score);
        assert!(long.score > medium.score);
    }

    #[test]
    fn test_special_chars_raise_the_score() {
        let without = password_strength("Password123");
        let with = password_strength("Password123!");
        assert!(with.score > without.score);
    }

    #[test]
    fn test_feedback_names_missing_rules() {
        assert!(password_strength("password1")
            .feedback
            .contains(&ValidationError::PasswordNoUppercase));
        assert!(password_strength("Password")
            .feedback
            .contains(&ValidationError::PasswordNoDigit));
        assert!(password_strength("Ab1")
            .feedback
            .contains(&ValidationError::PasswordTooShort));
        assert!(password_strength("MyP@ssw0rd123").feedback.is_empty());
    }

    #[test]
    fn test_level_buckets() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(39), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(69), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(70), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::Strong);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(StrengthLevel::Weak.css_class(), "weak");
        assert_eq!(StrengthLevel::Medium.css_class(), "medium");
        assert_eq!(StrengthLevel::Strong.css_class(), "strong");
    }
}
