//! Unified error handling for configuration loading.
//!
//! Every failure while reading, decoding, validating or installing the
//! record is reported as an [`AppError`].

use domain::DomainError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Record rules
    #[error("{0}")]
    Validation(String),

    // Sources
    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    // External
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    // Holder
    #[error("Environment configuration already initialized with different values")]
    AlreadyInitialized,

    #[error("Environment configuration not initialized")]
    NotInitialized,
}

impl AppError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::MissingKey(_) => "MISSING_KEY",
            AppError::InvalidValue { .. } => "INVALID_VALUE",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Dotenv(_) => "DOTENV_ERROR",
            AppError::AlreadyInitialized => "ALREADY_INITIALIZED",
            AppError::NotInitialized => "NOT_INITIALIZED",
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::InvalidTier(value) => AppError::InvalidValue {
                key: domain::KEY_APP_ENV.to_string(),
                value,
            },
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        AppError::MissingKey(key.into())
    }

    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        AppError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
