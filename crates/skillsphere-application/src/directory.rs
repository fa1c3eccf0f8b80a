//! Composition root.
//!
//! Builds the session store and profile service from configuration and
//! injected repositories. Front ends receive a `Directory` instead of reaching
//! for shared globals.

use std::sync::Arc;

use skillsphere_core::SphereError;
use skillsphere_core::config::SphereConfig;
use skillsphere_core::error::Result;
use skillsphere_core::profile::ProfileRepository;
use skillsphere_core::session::KeyValueStore;
use skillsphere_core::user::UserRepository;
use skillsphere_infrastructure::seed::{demo_accounts, demo_profiles};
use skillsphere_infrastructure::{
    InMemoryKeyValueStore, InMemoryProfileRepository, InMemoryUserRepository, SimulatedLatency,
    TomlKeyValueStore,
};

use crate::profile_service::ProfileService;
use crate::session_store::SessionStore;

pub struct Directory {
    session: Arc<SessionStore>,
    profiles: ProfileService,
}

impl Directory {
    /// Wires the services over the given repositories and session storage.
    pub fn new(
        config: &SphereConfig,
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(
            users,
            storage,
            SimulatedLatency::new(config.latency),
            config.auth.min_password_length,
        ));
        let profiles = ProfileService::new(profiles, session.clone(), config.profiles.clone());
        Self { session, profiles }
    }

    /// Everything in memory, including the session. Seeds demo data when the
    /// config asks for it.
    pub fn in_memory(config: &SphereConfig) -> Self {
        let (users, profiles) = in_memory_repositories(config);
        Self::new(config, users, profiles, Arc::new(InMemoryKeyValueStore::new()))
    }

    /// In-memory repositories with the session persisted to
    /// `storage.session_file`.
    ///
    /// Users are rebuilt on every start, so a persisted session whose user is
    /// not in the fresh repository is discarded.
    pub async fn with_session_file(config: &SphereConfig) -> Result<Self> {
        let path = config
            .storage
            .session_file
            .clone()
            .ok_or_else(|| SphereError::config("storage.session_file is not set"))?;
        tracing::debug!(path = %path.display(), "Using session file");

        let (users, profiles) = in_memory_repositories(config);
        let directory = Self::new(
            config,
            users,
            profiles,
            Arc::new(TomlKeyValueStore::new(path)),
        );
        directory.session.discard_stale_session().await?;
        Ok(directory)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn profiles(&self) -> &ProfileService {
        &self.profiles
    }
}

fn in_memory_repositories(
    config: &SphereConfig,
) -> (Arc<dyn UserRepository>, Arc<dyn ProfileRepository>) {
    let latency = SimulatedLatency::new(config.latency);
    let users: Arc<dyn UserRepository>;
    let profiles: Arc<dyn ProfileRepository>;
    if config.storage.seed_demo_data {
        users = Arc::new(InMemoryUserRepository::with_accounts(demo_accounts()));
        profiles = Arc::new(InMemoryProfileRepository::with_profiles(demo_profiles(), latency));
    } else {
        users = Arc::new(InMemoryUserRepository::new());
        profiles = Arc::new(InMemoryProfileRepository::new(latency));
    }
    (users, profiles)
}
