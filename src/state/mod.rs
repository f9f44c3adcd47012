/// Roster domain types shared across layers.
pub mod roster;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{memory::MemoryRosterStore, storage::RosterStore},
};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: the injected roster store plus the runtime
/// configuration it was built from.
///
/// Request handlers and services reach the roster exclusively through this
/// handle; the formation engine itself only ever sees snapshots.
pub struct AppState {
    store: Arc<dyn RosterStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct the state with a memory store seeded from the configuration.
    pub fn new(config: AppConfig) -> SharedState {
        let store = Arc::new(MemoryRosterStore::new(config.roster_capacity()));
        Self::with_store(config, store)
    }

    /// Construct the state around a caller-supplied store.
    pub fn with_store(config: AppConfig, store: Arc<dyn RosterStore>) -> SharedState {
        Arc::new(Self { store, config })
    }

    /// Handle to the roster store.
    pub fn roster_store(&self) -> Arc<dyn RosterStore> {
        Arc::clone(&self.store)
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
