//! Application state shared by all request handlers.
//!
//! Holds the storage trait object and the aggregator built over it. The
//! concrete backend is selected at compile time via feature flags.

use std::sync::Arc;

use headsmith_core::seo::SeoAggregator;
use headsmith_core::storage::SeoStore;

use crate::config::Config;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The record store; logically owns the backing document.
    pub store: Arc<dyn SeoStore>,
    /// Read-side orchestration over the same store.
    pub aggregator: SeoAggregator,
}

impl AppState {
    /// Creates state over an injected store.
    pub fn with_store(store: Arc<dyn SeoStore>) -> Self {
        let aggregator = SeoAggregator::new(store.clone());
        Self { store, aggregator }
    }
}

#[cfg(feature = "json")]
impl AppState {
    /// Creates AppState backed by the JSON file named in the configuration.
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(crate::storage::JsonFileStore::new(&config.seo_data_path));
        Self::with_store(store)
    }
}

#[cfg(feature = "inmemory")]
impl AppState {
    /// Creates AppState backed by volatile in-memory storage.
    pub fn new(_config: &Config) -> Self {
        Self::with_store(Arc::new(crate::storage::InMemoryStore::new()))
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Creates an AppState with in-memory storage for unit tests.
    fn default() -> Self {
        Self::with_store(Arc::new(crate::storage::InMemoryStore::new()))
    }
}
