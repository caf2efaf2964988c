//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed configuration and the in-memory identity store.
//! The store sits behind a tokio `RwLock`: `GET /api/auth/me` may need to
//! evict an expired session, so every handler takes the write half for
//! lookups that can mutate.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::services::identity::IdentityStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub identity: Arc<RwLock<IdentityStore>>,
}

impl AppState {
    /// Build state from config, seeding demo accounts when enabled.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let mut identity = IdentityStore::new(config.session_ttl);
        if config.seed_demo_accounts {
            identity.seed_demo_accounts();
        }
        Self { config: Arc::new(config), identity: Arc::new(RwLock::new(identity)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Default config with demo accounts seeded.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    /// State with no seeded accounts.
    #[must_use]
    pub fn empty_app_state() -> AppState {
        AppState::new(ServerConfig { seed_demo_accounts: false, ..ServerConfig::default() })
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
