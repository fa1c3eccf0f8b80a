//! Session store.
//!
//! Owns the register/login/logout lifecycle and the persisted session pair
//! (`auth_token`, `auth_user`). The store is passed explicitly to whatever
//! needs the current user; there is no global session.

use std::sync::Arc;

use skillsphere_core::SphereError;
use skillsphere_core::auth::{INVALID_CREDENTIALS_MESSAGE, validate_email, validate_password};
use skillsphere_core::error::Result;
use skillsphere_core::session::{
    AUTH_TOKEN_KEY, AUTH_USER_KEY, KeyValueStore, SessionState, generate_token,
};
use skillsphere_core::user::{NewUser, User, UserRepository};
use skillsphere_infrastructure::SimulatedLatency;

/// Two states: `Anonymous` and `Authenticated(User)`.
///
/// Successful `register`/`login` move to `Authenticated`, `logout` moves to
/// `Anonymous`. A failed call leaves the persisted session as it was.
pub struct SessionStore {
    users: Arc<dyn UserRepository>,
    storage: Arc<dyn KeyValueStore>,
    latency: SimulatedLatency,
    min_password_length: usize,
}

impl SessionStore {
    pub fn new(
        users: Arc<dyn UserRepository>,
        storage: Arc<dyn KeyValueStore>,
        latency: SimulatedLatency,
        min_password_length: usize,
    ) -> Self {
        Self {
            users,
            storage,
            latency,
            min_password_length,
        }
    }

    /// Registers a new user and signs them in.
    ///
    /// # Errors
    ///
    /// - `Validation`: email not of the form `local@domain.tld`, or password too short
    /// - `Conflict`: username or email already registered
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        self.latency.auth().await;

        validate_email(email)?;
        validate_password(password, self.min_password_length)?;

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let token = generate_token();
        let user = match self.users.insert(new_user, token.clone()).await {
            Ok(user) => user,
            Err(e) => {
                tracing::info!(username, "Registration rejected: {}", e);
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&token, &user) {
            tracing::warn!(user_id = %user.id, "Session not saved, rolling back registration: {}", e);
            if let Err(undo) = self.users.remove(&user.id).await {
                tracing::error!(user_id = %user.id, "Rollback failed: {}", undo);
            }
            return Err(e);
        }
        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Signs in an existing user with a fresh token.
    ///
    /// # Errors
    ///
    /// - `Auth`: unknown email or wrong password (same message for both)
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.latency.auth().await;

        let account = self
            .users
            .find_by_email(email)
            .await?
            .filter(|account| account.verify_password(password))
            .ok_or_else(|| {
                tracing::info!("Login rejected");
                SphereError::auth(INVALID_CREDENTIALS_MESSAGE)
            })?;

        let token = generate_token();
        let user = self
            .users
            .set_token(&account.user.id, Some(token.clone()))
            .await?;

        if let Err(e) = self.persist(&token, &user) {
            tracing::warn!(user_id = %user.id, "Session not saved, restoring previous token: {}", e);
            if let Err(undo) = self.users.set_token(&user.id, account.user.token).await {
                tracing::error!(user_id = %user.id, "Rollback failed: {}", undo);
            }
            return Err(e);
        }
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Clears the persisted session. Safe to call when already signed out.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove_many(&[AUTH_TOKEN_KEY, AUTH_USER_KEY])?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Clears a persisted session that does not belong to a known user.
    ///
    /// A session is dropped when only one of its two entries is present, or
    /// when the stored user no longer matches an account in the repository
    /// (by id and email). Run once when the store is opened over persisted
    /// storage.
    pub async fn discard_stale_session(&self) -> Result<()> {
        let stale = match (self.token(), self.current_user()) {
            (None, None) => false,
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Discarding incomplete session");
                true
            }
            (Some(_), Some(user)) => {
                let known = self
                    .users
                    .find_by_email(&user.email)
                    .await?
                    .is_some_and(|account| account.user.id == user.id);
                if !known {
                    tracing::warn!(user_id = %user.id, "Discarding session of unknown user");
                }
                !known
            }
        };

        if stale {
            self.logout()?;
        }
        Ok(())
    }

    /// Returns the signed-in user, or `None` if the session is absent,
    /// unreadable or corrupt.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get(AUTH_USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session entry: {}", e);
                None
            }
        }
    }

    /// Returns the persisted session token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY).unwrap_or_else(|e| {
            tracing::warn!("Failed to read session token: {}", e);
            None
        })
    }

    /// True iff a session token is persisted.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn state(&self) -> SessionState {
        match (self.token(), self.current_user()) {
            (Some(_), Some(user)) => SessionState::Authenticated(user),
            _ => SessionState::Anonymous,
        }
    }

    // Writes both entries in one call so a failure leaves neither behind
    fn persist(&self, token: &str, user: &User) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set_many(vec![
            (AUTH_TOKEN_KEY, token.to_string()),
            (AUTH_USER_KEY, user_json),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsphere_core::auth::{INVALID_EMAIL_MESSAGE, USER_EXISTS_MESSAGE};
    use skillsphere_infrastructure::{InMemoryKeyValueStore, InMemoryUserRepository};

    fn store() -> (SessionStore, Arc<InMemoryUserRepository>, Arc<InMemoryKeyValueStore>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let store = SessionStore::new(users.clone(), storage.clone(), SimulatedLatency::none(), 6);
        (store, users, storage)
    }

    #[tokio::test]
    async fn test_register_signs_in() {
        let (store, _, _) = store();
        let user = store.register("ada", "ada@example.com", "secret1").await.unwrap();

        let current = store.current_user().unwrap();
        assert_eq!(current.email, "ada@example.com");
        assert_eq!(current.username, "ada");
        assert_eq!(current, user);
        assert!(store.is_authenticated());
        assert_eq!(store.token(), user.token);
        assert_eq!(store.state(), SessionState::Authenticated(user));
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let (store, users, _) = store();

        let bad_email = store.register("ada", "ada.example.com", "secret1").await;
        assert_eq!(bad_email.unwrap_err(), SphereError::validation(INVALID_EMAIL_MESSAGE));

        let short = store.register("ada", "ada@example.com", "12345").await;
        assert_eq!(
            short.unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );

        assert!(users.list_all().await.unwrap().is_empty());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_conflict_leaves_state_unchanged() {
        let (store, users, _) = store();
        let first = store.register("ada", "ada@example.com", "secret1").await.unwrap();
        let before = users.list_all().await.unwrap();

        let err = store.register("ada", "other@example.com", "secret1").await.unwrap_err();
        assert_eq!(err, SphereError::conflict(USER_EXISTS_MESSAGE));
        let err = store.register("someone", "ada@example.com", "secret1").await.unwrap_err();
        assert!(err.is_conflict());

        assert_eq!(users.list_all().await.unwrap(), before);
        assert_eq!(store.current_user(), Some(first));
    }

    #[tokio::test]
    async fn test_login_reassigns_token() {
        let (store, _, _) = store();
        let registered = store.register("ada", "ada@example.com", "secret1").await.unwrap();
        store.logout().unwrap();

        let user = store.login("ada@example.com", "secret1").await.unwrap();

        assert_eq!(user.id, registered.id);
        assert_ne!(user.token, registered.token);
        assert_eq!(store.token(), user.token);
        assert_eq!(store.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_login_unknown_email_or_wrong_password() {
        let (store, _, _) = store();
        store.register("ada", "ada@example.com", "secret1").await.unwrap();
        store.logout().unwrap();

        let unknown = store.login("nobody@example.com", "secret1").await.unwrap_err();
        assert_eq!(unknown, SphereError::auth(INVALID_CREDENTIALS_MESSAGE));

        let wrong = store.login("ada@example.com", "wrong-password").await.unwrap_err();
        assert!(wrong.is_auth());

        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (store, _, _) = store();
        store.logout().unwrap();
        store.register("ada", "ada@example.com", "secret1").await.unwrap();

        store.logout().unwrap();
        store.logout().unwrap();

        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_corrupt_user_entry_is_no_session() {
        let (store, _, storage) = store();
        storage.set(AUTH_USER_KEY, "{not json".to_string()).unwrap();

        assert!(store.current_user().is_none());
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_is_authenticated_tracks_token_only() {
        let (store, _, storage) = store();
        storage.set(AUTH_TOKEN_KEY, "sst-x".to_string()).unwrap();
        assert!(store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    // Key-value store whose writes always fail
    struct ReadOnlyStore {
        inner: InMemoryKeyValueStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, _key: &str, _value: String) -> Result<()> {
            Err(SphereError::io("read-only"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(SphereError::io("read-only"))
        }

        fn set_many(&self, _entries: Vec<(&str, String)>) -> Result<()> {
            Err(SphereError::io("read-only"))
        }
    }

    fn read_only_store() -> (SessionStore, Arc<InMemoryUserRepository>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let storage = Arc::new(ReadOnlyStore {
            inner: InMemoryKeyValueStore::new(),
        });
        let store = SessionStore::new(users.clone(), storage, SimulatedLatency::none(), 6);
        (store, users)
    }

    #[tokio::test]
    async fn test_register_rolls_back_when_session_cannot_be_saved() {
        let (store, users) = read_only_store();

        let first = store.register("zed", "zed@example.com", "secret1").await.unwrap_err();
        assert_eq!(first, SphereError::io("read-only"));
        assert!(users.list_all().await.unwrap().is_empty());

        let second = store.register("zed", "zed@example.com", "secret1").await.unwrap_err();
        assert_eq!(second, SphereError::io("read-only"));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_restores_token_when_session_cannot_be_saved() {
        let (store, users) = read_only_store();
        let new_user = NewUser {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        };
        users.insert(new_user, "sst-old".to_string()).await.unwrap();

        let err = store.login("ada@example.com", "secret1").await.unwrap_err();
        assert_eq!(err, SphereError::io("read-only"));

        let account = users.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(account.user.token.as_deref(), Some("sst-old"));
    }

    #[tokio::test]
    async fn test_discard_stale_session_keeps_known_user() {
        let (store, _, _) = store();
        let user = store.register("ada", "ada@example.com", "secret1").await.unwrap();

        store.discard_stale_session().await.unwrap();

        assert_eq!(store.current_user(), Some(user));
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_discard_stale_session_drops_unknown_user() {
        let (store, _, storage) = store();
        let ghost = User {
            id: "6".to_string(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            token: Some("sst-ghost".to_string()),
        };
        store.persist("sst-ghost", &ghost).unwrap();
        assert!(store.is_authenticated());

        store.discard_stale_session().await.unwrap();

        assert_eq!(store.state(), SessionState::Anonymous);
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_discard_stale_session_drops_half_session() {
        let (store, _, storage) = store();
        storage.set(AUTH_TOKEN_KEY, "sst-x".to_string()).unwrap();

        store.discard_stale_session().await.unwrap();

        assert!(!store.is_authenticated());
    }
}
