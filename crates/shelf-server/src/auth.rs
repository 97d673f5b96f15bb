use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Header slot the API key is transported in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Gate applied to mutating routes only; reads never pass through here.
///
/// Evaluated in order: no header at all is 401, a header that does not
/// match the configured key is 403, a match admits the request unchanged.
/// The gate holds no state and has no side effects on admitted requests.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        None => Err(ApiError::Unauthorized),
        Some(key) if key != state.api_key.as_ref() => Err(ApiError::Forbidden),
        Some(_) => Ok(next.run(request).await),
    }
}
