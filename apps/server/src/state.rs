//! Shared application state.
//!
//! The store client is constructed once at process start and injected into
//! every handler through axum's `State` extractor - there is no ambient
//! global connection. The state itself is immutable; all mutation happens
//! inside the document store.

use kedai_store::DocumentStore;

use crate::config::ServerConfig;

/// State shared by all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Document store handle (clones share one pool).
    pub store: DocumentStore,

    /// Loaded configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(store: DocumentStore, config: ServerConfig) -> Self {
        AppState { store, config }
    }
}

/// Builds state backed by an isolated in-memory store (for tests).
#[cfg(test)]
pub(crate) async fn test_state() -> std::sync::Arc<AppState> {
    let store = DocumentStore::connect(kedai_store::StoreConfig::in_memory())
        .await
        .expect("in-memory store");

    let config = ServerConfig {
        port: 8000,
        database_url: "sqlite://:memory:".to_string(),
        database_name: "kedai_test".to_string(),
    };

    std::sync::Arc::new(AppState::new(store, config))
}
