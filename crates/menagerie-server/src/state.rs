//! Application state with the shared `AnimalStore`.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::RwLock<>>`. Reads
//! (list, lookup) share the lock; appends take it exclusively, so a reader
//! sees the store either before or after an append, never in between.

use std::sync::Arc;

use menagerie_core::AnimalStore;
use tokio::sync::RwLock;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<AnimalStore>>,
}

impl AppState {
    /// State holding the five seed records.
    pub fn seeded() -> Self {
        Self::with_store(AnimalStore::seeded())
    }

    /// State wrapping an existing store (used by tests).
    pub fn with_store(store: AnimalStore) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
