//! Skill domain module.
//!
//! Skills are tags from a fixed catalog; users attach them to profiles but
//! never create or delete them.

mod catalog;
mod model;

// Re-export public API
pub use catalog::{available_skills, default_skill_catalog};
pub use model::Skill;
