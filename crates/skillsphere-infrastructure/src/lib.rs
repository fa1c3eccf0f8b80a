//! Infrastructure for SkillSphere: in-memory repositories, session storage
//! backends, configuration loading and demo data.

pub mod config_service;
pub mod in_memory_profile_repository;
pub mod in_memory_user_repository;
pub mod latency;
pub mod paths;
pub mod seed;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_profile_repository::InMemoryProfileRepository;
pub use crate::in_memory_user_repository::InMemoryUserRepository;
pub use crate::latency::SimulatedLatency;
pub use crate::paths::SpherePaths;
pub use crate::storage::{InMemoryKeyValueStore, TomlKeyValueStore};
