//! Monthly aggregation.
//!
//! Turns a raw snapshot into the one normalized structure every renderer and
//! exporter reads: the type universe per section, one [`MonthlySummary`] per
//! month with figures and carried-forward balances aligned to that universe,
//! and the brought-forward row.

pub mod builder;
pub mod cache;
pub mod engine;
pub mod types;
pub mod universe;

#[cfg(test)]
mod tests;

pub use builder::AggregationBuilder;
pub use cache::AggregationCache;
pub use engine::StatementEngine;
pub use types::{
    BroughtForward, Figures, MonthEntries, MonthEntry, MonthlyAggregation, MonthlySummary,
    TypeColumn, TypeUniverse,
};
