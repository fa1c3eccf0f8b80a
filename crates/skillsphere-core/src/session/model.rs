//! Session domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::User;

/// Key holding the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key holding the JSON-serialized current user.
pub const AUTH_USER_KEY: &str = "auth_user";

/// The persisted {token, user} pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Authentication state as observed by callers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Generates a fresh opaque session token.
pub fn generate_token() -> String {
    format!("sst-{}", Uuid::new_v4().simple())
}
