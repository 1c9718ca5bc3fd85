//! Shared application state for request handlers.

use crate::health::HealthEndpoint;

/// Shared application state, cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub health: HealthEndpoint,
}

impl AppState {
    /// Creates a new application state around the given health endpoint.
    pub fn new(health: HealthEndpoint) -> Self {
        Self { health }
    }
}
