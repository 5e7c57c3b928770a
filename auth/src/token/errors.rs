use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Malformed token, bad signature, or missing mandatory claim.
    #[error("Token is invalid: {0}")]
    Invalid(String),

    /// Signature checks out but the expiry instant has passed.
    #[error("Token is expired")]
    Expired,
}
