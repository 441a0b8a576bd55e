//! Application state
//!
//! Holds the shared state for the Axum application: the roster service and
//! the configuration.

use std::sync::Arc;

use roster_common::AppConfig;
use roster_service::{RosterService, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Roster service, shared so load generations are counted across requests
    roster: Arc<RosterService>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            roster: Arc::new(RosterService::new(service_context)),
            config: Arc::new(config),
        }
    }

    /// Get the roster service
    pub fn roster(&self) -> &RosterService {
        &self.roster
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        self.roster.context()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("roster", &"RosterService")
            .field("config", &"AppConfig")
            .finish()
    }
}
