use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shelf_store::StoreError;
use shelf_types::TypeError;
use thiserror::Error;

/// Per-request failure taxonomy.
///
/// Every handler failure is caught here and translated into a response;
/// nothing propagates past the handler boundary and nothing is retried.
/// The malformed-id / not-found split is load-bearing: a syntactically
/// invalid id is always 400, a well-formed id with no record is always 404.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential supplied on a mutating request.
    #[error("API key required")]
    Unauthorized,

    /// A credential was supplied but does not match the configured key.
    #[error("Invalid API key")]
    Forbidden,

    /// Request body is missing required fields.
    #[error("Name and price are required")]
    MissingFields,

    /// The path id is not syntactically a valid item id.
    #[error("Invalid ID")]
    InvalidId,

    /// Well-formed id, no matching item.
    #[error("Item not found")]
    NotFound,

    /// Store-level failure: constraint violations map to 400, backend
    /// unavailability to a generic 500.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<TypeError> for ApiError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidId(_) => Self::InvalidId,
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MissingFields | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Constraint(_)) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound => json!({ "message": self.to_string() }),
            Self::Store(StoreError::Unavailable(reason)) => {
                tracing::error!(%reason, "store unavailable");
                json!({ "error": "Server error" })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Result alias for handler bodies.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from server lifecycle operations (bind, startup store check).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server lifecycle operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_types::ConstraintViolation;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(ConstraintViolation::NegativePrice.into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::Unavailable("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_id_from_type_error() {
        let err: ApiError = TypeError::InvalidId("nope".into()).into();
        assert!(matches!(err, ApiError::InvalidId));
    }
}
