//! Profile use cases.
//!
//! Wraps the profile repository with the rules the profile form and the
//! browse/search pages apply: authentication, required fields, optional
//! one-profile-per-user enforcement.

use std::sync::Arc;

use skillsphere_core::SphereError;
use skillsphere_core::config::ProfileSettings;
use skillsphere_core::error::Result;
use skillsphere_core::profile::{Profile, ProfileDraft, ProfileRepository, ProfileUpdate};
use skillsphere_core::search::{ProfileFilters, search_profiles};
use skillsphere_core::skill::{Skill, available_skills};
use skillsphere_core::user::User;

use crate::session_store::SessionStore;

pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to create or update a profile";
pub const PROFILE_EXISTS_MESSAGE: &str = "You already have a profile";

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    session: Arc<SessionStore>,
    settings: ProfileSettings,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        session: Arc<SessionStore>,
        settings: ProfileSettings,
    ) -> Self {
        Self {
            profiles,
            session,
            settings,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Profile>> {
        self.profiles.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Profile>> {
        self.profiles.find_by_id(id).await
    }

    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        self.profiles.find_by_user_id(user_id).await
    }

    /// Lists all profiles, then narrows them with `filters`.
    pub async fn search(&self, filters: &ProfileFilters) -> Result<Vec<Profile>> {
        let all = self.profiles.get_all().await?;
        let results = search_profiles(&all, filters);
        tracing::debug!(?filters, matched = results.len(), total = all.len(), "Profile search");
        Ok(results)
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.profiles.list_skills().await
    }

    /// Catalog skills not yet in `selected`, for the skill picker.
    pub async fn available_skills(&self, selected: &[Skill]) -> Result<Vec<Skill>> {
        let catalog = self.profiles.list_skills().await?;
        Ok(available_skills(&catalog, selected))
    }

    /// Looks up catalog skills by name, case-insensitively, keeping the order
    /// of `names`.
    ///
    /// # Errors
    ///
    /// - `Validation`: a name is not in the catalog
    pub async fn resolve_skills(&self, names: &[String]) -> Result<Vec<Skill>> {
        let catalog = self.profiles.list_skills().await?;
        names
            .iter()
            .map(|name| {
                catalog
                    .iter()
                    .find(|skill| skill.name.eq_ignore_ascii_case(name.trim()))
                    .cloned()
                    .ok_or_else(|| SphereError::validation(format!("Unknown skill: '{}'", name)))
            })
            .collect()
    }

    /// The signed-in user's profile, if they have one.
    pub async fn my_profile(&self) -> Result<Option<Profile>> {
        let user = self.require_user()?;
        self.profiles.find_by_user_id(&user.id).await
    }

    /// Creates a profile owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// - `Auth`: nobody is signed in
    /// - `Validation`: name, title or bio missing
    /// - `Conflict`: the user already has a profile and
    ///   `single_profile_per_user` is enabled
    pub async fn create_for_current_user(&self, draft: ProfileDraft) -> Result<Profile> {
        let user = self.require_user()?;
        draft.validate()?;

        if self.settings.single_profile_per_user
            && self.profiles.find_by_user_id(&user.id).await?.is_some()
        {
            return Err(SphereError::conflict(PROFILE_EXISTS_MESSAGE));
        }

        let profile = self.profiles.create(draft, &user.id).await?;
        tracing::info!(profile_id = %profile.id, user_id = %user.id, "Profile created");
        Ok(profile)
    }

    /// Applies a partial update. Requires a signed-in user.
    ///
    /// # Errors
    ///
    /// - `Auth`: nobody is signed in
    /// - `Validation`: a supplied name, title or bio is blank
    /// - `NotFound`: no profile has that id
    pub async fn update(&self, id: &str, update: ProfileUpdate) -> Result<Profile> {
        self.require_user()?;
        update.validate()?;

        let profile = self.profiles.update(id, update).await?;
        tracing::info!(profile_id = %profile.id, "Profile updated");
        Ok(profile)
    }

    fn require_user(&self) -> Result<User> {
        self.session
            .current_user()
            .ok_or_else(|| SphereError::auth(LOGIN_REQUIRED_MESSAGE))
    }
}
