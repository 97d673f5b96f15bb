use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid item id: {0}")]
    InvalidId(String),
}

/// Domain-constraint failures, raised by the store at write time.
///
/// These are distinct from request-shape errors (missing fields), which the
/// server checks before any store call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must not be negative")]
    NegativePrice,
}
