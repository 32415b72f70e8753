//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input could not be read at all.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration is present but unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document generation or saving failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable error code for logs and callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Export(_) => "EXPORT_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true when retrying the failed step may succeed.
    ///
    /// Only export failures are retryable; the aggregation that fed them is
    /// deterministic and never needs to run again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
