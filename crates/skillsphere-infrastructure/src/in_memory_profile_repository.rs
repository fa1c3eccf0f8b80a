//! In-memory profile repository.
//!
//! Stands in for a remote profile API: records live in a `Vec` behind a
//! `tokio::sync::RwLock`, and every call waits for the configured latency.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use skillsphere_core::SphereError;
use skillsphere_core::error::Result;
use skillsphere_core::profile::{Profile, ProfileDraft, ProfileRepository, ProfileUpdate};
use skillsphere_core::skill::{Skill, default_skill_catalog};

use crate::latency::SimulatedLatency;

/// Profile storage held in process memory. Clones share the same records.
#[derive(Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
    skills: Arc<Vec<Skill>>,
    latency: SimulatedLatency,
}

impl InMemoryProfileRepository {
    /// Creates an empty repository with the default skill catalog.
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_profiles(Vec::new(), latency)
    }

    /// Creates a repository pre-populated with `profiles`.
    pub fn with_profiles(profiles: Vec<Profile>, latency: SimulatedLatency) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
            skills: Arc::new(default_skill_catalog()),
            latency,
        }
    }

    /// Replaces the skill catalog.
    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = Arc::new(skills);
        self
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_all(&self) -> Result<Vec<Profile>> {
        self.latency.list().await;
        Ok(self.profiles.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>> {
        self.latency.read().await;
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        self.latency.read().await;
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn create(&self, draft: ProfileDraft, user_id: &str) -> Result<Profile> {
        self.latency.write().await;
        let mut profiles = self.profiles.write().await;

        // Sequential ids from the collection size; only sound for a single writer
        let id = (profiles.len() + 1).to_string();
        let profile = draft.into_profile(id, user_id.to_string(), Utc::now());
        profiles.push(profile.clone());

        tracing::debug!(profile_id = %profile.id, user_id, "Profile stored");
        Ok(profile)
    }

    async fn update(&self, id: &str, update: ProfileUpdate) -> Result<Profile> {
        self.latency.write().await;
        let mut profiles = self.profiles.write().await;

        let profile = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SphereError::not_found("Profile", id))?;
        update.apply_to(profile, Utc::now());

        tracing::debug!(profile_id = %id, "Profile updated");
        Ok(profile.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.latency.read().await;
        Ok(self.skills.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryProfileRepository {
        InMemoryProfileRepository::new(SimulatedLatency::none())
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = repo();
        let first = repo.create(ProfileDraft::new("Ada", "Analyst", "hi"), "1").await.unwrap();
        let second = repo.create(ProfileDraft::new("Grace", "Admiral", "hi"), "2").await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_twice_for_same_user_keeps_both() {
        let repo = repo();
        let draft = ProfileDraft::new("Bob", "Dev", "hi");

        let first = repo.create(draft.clone(), "7").await.unwrap();
        let second = repo.create(draft, "7").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.user_id, "7");
        assert_eq!(second.user_id, "7");

        // first inserted wins
        let found = repo.find_by_user_id("7").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_get_all_is_snapshot_in_insertion_order() {
        let repo = repo();
        repo.create(ProfileDraft::new("Ada", "Analyst", "hi"), "1").await.unwrap();
        repo.create(ProfileDraft::new("Grace", "Admiral", "hi"), "2").await.unwrap();

        let mut snapshot = repo.get_all().await.unwrap();
        snapshot[0].name = "changed".to_string();

        let fresh = repo.get_all().await.unwrap();
        let names: Vec<&str> = fresh.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = repo();
        assert!(repo.find_by_id("1").await.unwrap().is_none());
        assert!(repo.find_by_user_id("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_and_bumps_timestamp() {
        let repo = repo();
        let created = repo
            .create(ProfileDraft::new("Ada", "Analyst", "old").with_location("London"), "1")
            .await
            .unwrap();

        let updated = repo.update(&created.id, ProfileUpdate::bio("x")).await.unwrap();

        assert_eq!(updated.bio, "x");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.location, created.location);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_profile_is_not_found() {
        let repo = repo();
        repo.create(ProfileDraft::new("Ada", "Analyst", "hi"), "1").await.unwrap();
        let before = repo.get_all().await.unwrap();

        let err = repo.update("99", ProfileUpdate::bio("x")).await.unwrap_err();

        assert_eq!(err, SphereError::not_found("Profile", "99"));
        assert_eq!(repo.get_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_list_skills_returns_catalog() {
        let repo = repo().with_skills(vec![Skill::new("1", "Rust")]);
        assert_eq!(repo.list_skills().await.unwrap(), vec![Skill::new("1", "Rust")]);

        let default = InMemoryProfileRepository::new(SimulatedLatency::none());
        assert_eq!(default.list_skills().await.unwrap(), default_skill_catalog());
    }
}
