use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SphereError};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const USER_EXISTS_MESSAGE: &str = "Username or email already in use";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

// local@domain.tld, no whitespace, exactly one '@' between non-empty parts
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SphereError::validation(INVALID_EMAIL_MESSAGE))
    }
}

/// Passwords are only checked for length, counted in characters.
pub fn validate_password(password: &str, min_length: usize) -> Result<()> {
    if password.chars().count() >= min_length {
        Ok(())
    } else {
        Err(SphereError::validation(format!(
            "Password must be at least {} characters",
            min_length
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "ada", "ada@example", "@example.com", "ada@.com.", "a da@example.com", "ada@@example.com"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
        assert_eq!(
            validate_email("nope").unwrap_err(),
            SphereError::validation(INVALID_EMAIL_MESSAGE)
        );
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("secret", DEFAULT_MIN_PASSWORD_LENGTH).is_ok());
        let err = validate_password("short", DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
