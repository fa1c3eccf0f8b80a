//! Profile creation and update request models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Profile;
use crate::error::{Result, SphereError};
use crate::skill::Skill;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, Title, and Bio are required fields";

/// Fields supplied when creating a profile.
///
/// Every field is optional at this level; the repository fills gaps with
/// empty values. Form-level rules live in [`ProfileDraft::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ProfileDraft {
    /// Starts a draft with the three fields the profile form requires.
    pub fn new(name: impl Into<String>, title: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            title: Some(title.into()),
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = Some(skills);
        self
    }

    /// Name, title and bio must be present and not blank.
    pub fn validate(&self) -> Result<()> {
        let required = [&self.name, &self.title, &self.bio];
        if required.iter().any(|field| is_blank(field.as_deref())) {
            return Err(SphereError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(())
    }

    /// Builds the stored record, defaulting every field the draft left out.
    pub fn into_profile(self, id: String, user_id: String, now: DateTime<Utc>) -> Profile {
        Profile {
            id,
            user_id,
            name: self.name.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            location: non_blank(self.location),
            avatar: non_blank(self.avatar),
            skills: Profile::dedup_skills(self.skills.unwrap_or_default()),
            github: non_blank(self.github),
            linkedin: non_blank(self.linkedin),
            website: non_blank(self.website),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update: `Some` fields overwrite, `None` fields are kept.
///
/// For the optional text fields an empty string clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ProfileUpdate {
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    /// Returns true if the update supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.bio.is_none()
            && self.location.is_none()
            && self.avatar.is_none()
            && self.skills.is_none()
            && self.github.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
    }

    /// Supplied required fields must not be blank.
    pub fn validate(&self) -> Result<()> {
        let supplied = [&self.name, &self.title, &self.bio];
        if supplied
            .iter()
            .any(|field| field.is_some() && is_blank(field.as_deref()))
        {
            return Err(SphereError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(())
    }

    /// Shallow-merges this update over `profile` and stamps `updated_at`.
    ///
    /// `id`, `user_id` and `created_at` are never touched.
    pub fn apply_to(self, profile: &mut Profile, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(title) = self.title {
            profile.title = title;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(skills) = self.skills {
            profile.skills = Profile::dedup_skills(skills);
        }
        merge_optional(&mut profile.location, self.location);
        merge_optional(&mut profile.avatar, self.avatar);
        merge_optional(&mut profile.github, self.github);
        merge_optional(&mut profile.linkedin, self.linkedin);
        merge_optional(&mut profile.website, self.website);
        profile.updated_at = now;
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn merge_optional(target: &mut Option<String>, supplied: Option<String>) {
    if let Some(value) = supplied {
        *target = non_blank(Some(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored() -> Profile {
        let created = Utc::now() - Duration::days(1);
        ProfileDraft::new("Ada Lovelace", "Analyst", "First program")
            .with_location("London")
            .with_skills(vec![Skill::new("6", "Rust")])
            .into_profile("1".to_string(), "1".to_string(), created)
    }

    #[test]
    fn test_draft_defaults_missing_fields() {
        let now = Utc::now();
        let profile = ProfileDraft::default().into_profile("3".into(), "7".into(), now);
        assert_eq!(profile.name, "");
        assert_eq!(profile.bio, "");
        assert!(profile.location.is_none());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.created_at, now);
        assert_eq!(profile.updated_at, now);
    }

    #[test]
    fn test_draft_blank_links_become_none() {
        let mut draft = ProfileDraft::new("Bob", "Dev", "hi");
        draft.github = Some("   ".to_string());
        draft.website = Some("https://bob.dev".to_string());
        let profile = draft.into_profile("1".into(), "2".into(), Utc::now());
        assert!(profile.github.is_none());
        assert_eq!(profile.website.as_deref(), Some("https://bob.dev"));
    }

    #[test]
    fn test_draft_validate_requires_name_title_bio() {
        assert!(ProfileDraft::new("Bob", "Dev", "hi").validate().is_ok());

        let err = ProfileDraft::new("Bob", " ", "hi").validate().unwrap_err();
        assert_eq!(err, SphereError::validation(REQUIRED_FIELDS_MESSAGE));

        let mut missing_bio = ProfileDraft::new("Bob", "Dev", "hi");
        missing_bio.bio = None;
        assert!(missing_bio.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_update_bio_only_changes_bio_and_timestamp() {
        let before = stored();
        let mut after = before.clone();
        let now = Utc::now();

        ProfileUpdate::bio("x").apply_to(&mut after, now);

        assert_eq!(after.bio, "x");
        assert_eq!(after.updated_at, now);
        assert_eq!(after.name, before.name);
        assert_eq!(after.title, before.title);
        assert_eq!(after.location, before.location);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.id, before.id);
        assert_eq!(after.user_id, before.user_id);
    }

    #[test]
    fn test_update_empty_string_clears_optional_field() {
        let mut profile = stored();
        let update = ProfileUpdate {
            location: Some(String::new()),
            ..ProfileUpdate::default()
        };
        update.apply_to(&mut profile, Utc::now());
        assert!(profile.location.is_none());
    }

    #[test]
    fn test_update_validate_only_checks_supplied_fields() {
        assert!(ProfileUpdate::bio("x").validate().is_ok());
        assert!(ProfileUpdate::default().validate().is_ok());
        assert!(ProfileUpdate::default().is_empty());

        let blank_name = ProfileUpdate {
            name: Some("".to_string()),
            ..ProfileUpdate::default()
        };
        assert!(blank_name.validate().unwrap_err().is_validation());
    }
}
