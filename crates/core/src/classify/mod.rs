//! Type classification.
//!
//! Maps raw product-type labels ("Share Capital", "Instant Loan Plus",
//! "Sodas", ...) to reporting buckets and provides the lookups the
//! statement layout is built from:
//! - first entry matching a pattern
//! - the "not an instant loan" aggregate
//! - zero-defaulting field extraction

pub mod classifier;
pub mod error;
pub mod lookup;
pub mod types;

pub use classifier::{Classifier, Section, compile_pattern};
pub use error::ClassifyError;
pub use lookup::{extract_field, find_by_bucket, find_by_pattern, sum_excluding, sum_not_instant_loan};
pub use types::Bucket;
