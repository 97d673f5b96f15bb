//! HTTP server for the shelf item service.
//!
//! Exposes the item CRUD API over axum. Mutating routes sit behind a
//! static API-key gate; read routes bypass it. Every failure is translated
//! at the handler boundary into a structured JSON body with the matching
//! status code.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use auth::API_KEY_HEADER;
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use server::ShelfServer;
pub use state::AppState;
