//! In-memory user repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use skillsphere_core::SphereError;
use skillsphere_core::auth::USER_EXISTS_MESSAGE;
use skillsphere_core::error::Result;
use skillsphere_core::user::{NewUser, User, UserAccount, UserRepository};

/// Registered users held in process memory. Clones share the same list.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.user.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser, token: String) -> Result<User> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .iter()
            .any(|a| a.collides_with(&new_user.username, &new_user.email))
        {
            return Err(SphereError::conflict(USER_EXISTS_MESSAGE));
        }

        let user = User {
            id: (accounts.len() + 1).to_string(),
            username: new_user.username,
            email: new_user.email,
            token: Some(token),
        };
        accounts.push(UserAccount {
            user: user.clone(),
            password: new_user.password,
        });
        Ok(user)
    }

    async fn set_token(&self, user_id: &str, token: Option<String>) -> Result<User> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.user.id == user_id)
            .ok_or_else(|| SphereError::not_found("User", user_id))?;
        account.user.token = token;
        Ok(account.user.clone())
    }

    async fn remove(&self, user_id: &str) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let index = accounts
            .iter()
            .position(|a| a.user.id == user_id)
            .ok_or_else(|| SphereError::not_found("User", user_id))?;
        accounts.remove(index);
        tracing::debug!(user_id, "User removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_token() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .insert(new_user("ada", "ada@example.com"), "t1".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.token.as_deref(), Some("t1"));

        let account = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert!(account.verify_password("secret1"));
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_username_or_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("ada", "ada@example.com"), "t1".into()).await.unwrap();

        let same_email = repo.insert(new_user("other", "ada@example.com"), "t2".into()).await;
        let same_name = repo.insert(new_user("ada", "other@example.com"), "t3".into()).await;

        assert_eq!(same_email.unwrap_err(), SphereError::conflict(USER_EXISTS_MESSAGE));
        assert!(same_name.unwrap_err().is_conflict());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_token() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("ada", "ada@example.com"), "t1".into()).await.unwrap();

        let updated = repo.set_token(&user.id, Some("t2".into())).await.unwrap();
        assert_eq!(updated.token.as_deref(), Some("t2"));

        let cleared = repo.set_token(&user.id, None).await.unwrap();
        assert_eq!(cleared.token, None);

        let err = repo.set_token("42", Some("t3".into())).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remove_frees_username_and_id() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("ada", "ada@example.com"), "t1".into()).await.unwrap();

        repo.remove(&user.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert!(repo.remove(&user.id).await.unwrap_err().is_not_found());

        let again = repo.insert(new_user("ada", "ada@example.com"), "t2".into()).await.unwrap();
        assert_eq!(again.id, user.id);
    }
}
