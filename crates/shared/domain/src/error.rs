//! Domain-level errors.
//!
//! These errors describe records that break the configuration rules.
//! They are independent of where the values came from.

use thiserror::Error;

/// Domain-specific errors for configuration rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown deployment tier name
    #[error("Invalid tier: {0}")]
    InvalidTier(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an invalid tier error
    pub fn invalid_tier(value: impl Into<String>) -> Self {
        DomainError::InvalidTier(value.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
