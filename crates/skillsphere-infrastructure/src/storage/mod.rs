//! Key-value storage backends for the session entry.

pub mod atomic_toml;
pub mod memory_store;
pub mod toml_store;

pub use atomic_toml::AtomicTomlFile;
pub use memory_store::InMemoryKeyValueStore;
pub use toml_store::TomlKeyValueStore;
