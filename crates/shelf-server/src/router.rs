use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all item endpoints.
///
/// Mutating routes are registered first and wrapped with the API-key gate
/// via `route_layer`; the read-only and liveness routes added afterwards
/// never touch the gate.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/items", post(handler::create_item))
        .route(
            "/api/items/:id",
            put(handler::update_item)
                .patch(handler::patch_item)
                .delete(handler::delete_item),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .route("/", get(handler::root_handler))
        .route("/version", get(handler::version_handler))
        .route("/api/items", get(handler::list_items))
        .route("/api/items/:id", get(handler::get_item))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
