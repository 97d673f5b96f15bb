use shelf_types::ConstraintViolation;

/// Errors from item store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write violated a domain constraint (empty name, negative price).
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// The backend could not be reached or failed mid-operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
