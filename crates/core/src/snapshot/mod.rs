//! Raw statement snapshots.
//!
//! A snapshot is the immutable, already-fetched input to the engine: the
//! monthly records for one year plus the cooperative chart of accounts.

pub mod entry;
pub mod error;
pub mod types;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Read;

pub use entry::{Field, LabeledEntry};
pub use error::SnapshotError;
pub use types::*;

impl StatementSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// Missing or malformed values inside the document degrade to zero or
    /// empty; only text that is not a JSON object is rejected.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a snapshot from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns true when there are no monthly records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monthly_summary.is_empty()
    }

    /// Content hash used as the aggregation cache key.
    ///
    /// Two snapshots with identical content hash identically.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = DefaultHasher::new();
        // Serializing plain data structs with string keys cannot fail.
        serde_json::to_vec(self)
            .unwrap_or_default()
            .hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}
