//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::Network;

/// Shared application state.
///
/// Registrations take the write lock; route queries share the read lock,
/// so queries never observe a network that is being modified.
#[derive(Clone)]
pub struct AppState {
    /// The network served by this instance
    pub network: Arc<RwLock<Network>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
