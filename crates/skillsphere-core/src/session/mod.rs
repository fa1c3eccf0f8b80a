//! Session domain module.
//!
//! The current session is persisted as two entries of a key-value store:
//! `auth_token` (opaque string) and `auth_user` (JSON-serialized `User`).
//! Both are written and cleared together.

mod model;
mod storage;

pub use model::{AUTH_TOKEN_KEY, AUTH_USER_KEY, Session, SessionState, generate_token};
pub use storage::KeyValueStore;
