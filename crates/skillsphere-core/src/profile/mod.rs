//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: The `Profile` record
//! - `request`: Create (`ProfileDraft`) and partial update (`ProfileUpdate`) models
//! - `repository`: Repository trait for profile persistence
//!
//! # Usage
//!
//! ```ignore
//! use skillsphere_core::profile::{Profile, ProfileDraft, ProfileRepository, ProfileUpdate};
//! ```

mod model;
mod repository;
mod request;

// Re-export public API
pub use model::Profile;
pub use repository::ProfileRepository;
pub use request::{ProfileDraft, ProfileUpdate, REQUIRED_FIELDS_MESSAGE};
