//! Snapshot error types.

use coop_shared::AppError;
use thiserror::Error;

/// Errors that can occur while reading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document is not valid JSON or not shaped like a snapshot.
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
