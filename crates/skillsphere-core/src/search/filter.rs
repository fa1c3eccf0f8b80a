//! Filter engine over an in-memory profile slice.

use super::model::ProfileFilters;
use crate::profile::Profile;

/// Returns the profiles matching every active criterion, in input order.
///
/// With no active criteria the input is returned unchanged.
pub fn search_profiles(profiles: &[Profile], filters: &ProfileFilters) -> Vec<Profile> {
    let skill = filters.active_skill().map(str::to_lowercase);
    let location = filters.active_location().map(str::to_lowercase);
    let term = filters.active_search().map(str::to_lowercase);

    profiles
        .iter()
        .filter(|profile| skill.as_deref().is_none_or(|s| profile.has_skill_named(s)))
        .filter(|profile| {
            location
                .as_deref()
                .is_none_or(|l| matches_location(profile, l))
        })
        .filter(|profile| term.as_deref().is_none_or(|t| matches_term(profile, t)))
        .cloned()
        .collect()
}

// `needle` is already lowercased
fn matches_location(profile: &Profile, needle: &str) -> bool {
    profile
        .location
        .as_deref()
        .is_some_and(|location| location.to_lowercase().contains(needle))
}

fn matches_term(profile: &Profile, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&profile.name)
        || contains(&profile.title)
        || contains(&profile.bio)
        || profile.skills.iter().any(|skill| contains(&skill.name))
}
