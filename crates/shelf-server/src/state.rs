use std::sync::Arc;

use shelf_store::ItemStore;

/// Shared router state: the store handle and the configured API key.
///
/// Cloned per request by axum; the store is behind an `Arc` so the clone
/// is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never log the key itself.
        f.debug_struct("AppState")
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}
