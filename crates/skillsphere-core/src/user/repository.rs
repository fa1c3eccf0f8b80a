//! User repository trait.

use super::model::{NewUser, User, UserAccount};
use crate::error::Result;

/// An abstract repository for registered users.
///
/// Decouples the session store from the storage mechanism (in-memory list
/// today, a remote API later).
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Retrieves every registered user, in registration order.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Finds the account registered under `email` (exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>>;

    /// Registers a new user.
    ///
    /// The repository assigns the identifier and stores `token` on the new
    /// user.
    ///
    /// # Returns
    ///
    /// - `Ok(User)`: The stored user
    /// - `Err(SphereError::Conflict)`: Username or email already taken; nothing
    ///   is stored
    async fn insert(&self, new_user: NewUser, token: String) -> Result<User>;

    /// Replaces the session token of an existing user. `None` clears it.
    ///
    /// # Returns
    ///
    /// - `Ok(User)`: The user with its new token
    /// - `Err(SphereError::NotFound)`: No user with that id
    async fn set_token(&self, user_id: &str, token: Option<String>) -> Result<User>;

    /// Deletes a user. Used to roll back a registration that could not be
    /// completed.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The user was removed
    /// - `Err(SphereError::NotFound)`: No user with that id
    async fn remove(&self, user_id: &str) -> Result<()>;
}
