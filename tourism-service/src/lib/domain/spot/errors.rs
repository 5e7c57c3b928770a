use thiserror::Error;

/// Error for rating value validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    #[error("Rating must be between {min} and {max}, got {actual}")]
    OutOfRange { min: f64, max: f64, actual: f64 },
}

/// Top-level error for spot, favorite and rating operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpotError {
    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("Spot not found: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}
