//! Profile repository trait.
//!
//! Defines the data-access contract a real API client would implement.

use super::model::Profile;
use super::request::{ProfileDraft, ProfileUpdate};
use crate::error::Result;
use crate::skill::Skill;

/// An abstract repository for profiles and the skill catalog.
///
/// # Implementation Notes
///
/// - Reads return copies; callers never hold references into storage.
/// - `create` does not check whether `user_id` already owns a profile.
/// - A failed call must leave storage unchanged.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves every profile in insertion order.
    async fn get_all(&self) -> Result<Vec<Profile>>;

    /// Finds a profile by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Finds the first profile (in insertion order) owned by `user_id`.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Stores a new profile owned by `user_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Profile)`: The stored record with its synthesized id and timestamps
    async fn create(&self, draft: ProfileDraft, user_id: &str) -> Result<Profile>;

    /// Merges `update` into the profile with the given id.
    ///
    /// # Returns
    ///
    /// - `Ok(Profile)`: The record as stored after the merge
    /// - `Err(SphereError::NotFound)`: No profile has that id
    async fn update(&self, id: &str, update: ProfileUpdate) -> Result<Profile>;

    /// Returns the skill catalog.
    async fn list_skills(&self) -> Result<Vec<Skill>>;
}
