//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::OrdersConfig;
use crate::store::OrderStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc` and immutable for the life of the process:
/// configuration is fixed at startup and the store keeps no state between
/// loads, so concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: OrdersConfig,
    store: OrderStore,
}

impl AppState {
    /// Create a new application state from loaded configuration.
    #[must_use]
    pub fn new(config: OrdersConfig) -> Self {
        let store = OrderStore::new(config.db_path.clone());

        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &OrdersConfig {
        &self.inner.config
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn store(&self) -> &OrderStore {
        &self.inner.store
    }
}
