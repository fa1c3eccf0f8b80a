//! Credential validation rules applied at registration.

mod validation;

pub use validation::{
    DEFAULT_MIN_PASSWORD_LENGTH, INVALID_CREDENTIALS_MESSAGE, INVALID_EMAIL_MESSAGE,
    USER_EXISTS_MESSAGE, is_valid_email, validate_email, validate_password,
};
