//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: `User` and the credential-bearing `UserAccount`
//! - `repository`: Repository trait for user persistence
//!
//! # Usage
//!
//! ```ignore
//! use skillsphere_core::user::{User, NewUser, UserRepository};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{NewUser, User, UserAccount};
pub use repository::UserRepository;
