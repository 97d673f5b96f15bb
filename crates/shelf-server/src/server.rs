use std::sync::Arc;

use tokio::net::TcpListener;

use shelf_store::ItemStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Shelf item API server.
pub struct ShelfServer {
    config: ServerConfig,
    store: Arc<dyn ItemStore>,
}

impl ShelfServer {
    pub fn new(config: ServerConfig, store: Arc<dyn ItemStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(
            self.store.clone(),
            self.config.api_key.clone(),
        ))
    }

    /// Start serving requests.
    ///
    /// The store is pinged before the listener binds: an instance that
    /// cannot reach its store must not accept traffic, so a failed ping is
    /// fatal and there is no retry.
    pub async fn serve(self) -> ServerResult<()> {
        self.store.ping().await?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("shelf server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_store::MemoryItemStore;

    #[test]
    fn server_construction() {
        let server = ShelfServer::new(ServerConfig::default(), Arc::new(MemoryItemStore::new()));
        assert_eq!(server.config().bind_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = ShelfServer::new(ServerConfig::default(), Arc::new(MemoryItemStore::new()));
        let _router = server.router();
    }
}
