//! Application layer for SkillSphere.
//!
//! Use cases over the domain traits: the session lifecycle, profile
//! management and search, and the `Directory` that wires them together.

pub mod directory;
pub mod profile_service;
pub mod session_store;

pub use directory::Directory;
pub use profile_service::ProfileService;
pub use session_store::SessionStore;
