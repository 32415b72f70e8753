//! Export error types.

use coop_shared::AppError;
use thiserror::Error;

/// Errors that can occur while producing or saving a document.
///
/// All of them are recoverable: callers may retry the export step alone.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The drawing backend rejected an operation.
    #[error("document backend failed: {0}")]
    Backend(String),

    /// The page layout cannot hold any table rows.
    #[error("invalid export layout: {0}")]
    Layout(String),

    /// Writing the document failed.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_recoverable_app_error() {
        let err: AppError = ExportError::backend("font missing").into();

        assert_eq!(err.error_code(), "EXPORT_FAILED");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("font missing"));
    }
}
