//! Classifier error types.

use coop_shared::AppError;
use thiserror::Error;

/// Errors raised while building a classifier from configuration.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A rule names a bucket that does not exist.
    #[error("Unknown bucket: {0}")]
    UnknownBucket(String),

    /// A rule's pattern is not a valid regular expression.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        Self::Configuration(err.to_string())
    }
}
