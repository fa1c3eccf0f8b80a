//! User domain model.

use serde::{Deserialize, Serialize};

/// A registered user as seen by the rest of the application.
///
/// This is the shape stored in the session entry (`auth_user`), so it never
/// carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Opaque session token, reassigned on every login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A stored user together with its credential.
///
/// Passwords are kept in plaintext; this directory has no security model.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub password: String,
}

impl UserAccount {
    /// Returns true if `password` matches the stored credential.
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Returns true if this account uses either the given username or email.
    pub fn collides_with(&self, username: &str, email: &str) -> bool {
        self.user.username == username || self.user.email == email
    }
}
