//! Error types shared across the registry core.

use thiserror::Error;

/// Rejected user input. Reported to the user; no state is mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("patient name must not be empty")]
    EmptyName,

    #[error("invalid age: {0:?}")]
    InvalidAge(String),

    #[error("invalid height: {0:?}")]
    InvalidHeight(String),

    #[error("invalid weight: {0:?}")]
    InvalidWeight(String),

    #[error("invalid gender: {0:?}")]
    InvalidGender(String),

    #[error("height must be a positive, finite number, got {0} cm")]
    NonPositiveHeight(f64),

    #[error("weight must be a positive, finite number, got {0} kg")]
    NonPositiveWeight(f64),
}

/// Record store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
