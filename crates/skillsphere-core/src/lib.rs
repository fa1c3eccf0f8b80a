//! Domain layer for SkillSphere.
//!
//! Models, repository traits, validation rules and the profile search engine.
//! Nothing in this crate performs I/O.

pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod search;
pub mod session;
pub mod skill;
pub mod user;

// Re-export common error type
pub use error::SphereError;
