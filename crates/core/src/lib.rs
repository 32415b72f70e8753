//! Core statement logic for the savings cooperative.
//!
//! This crate turns already-fetched statement snapshots into monthly
//! summaries, running balances and fixed-layout statements. It has ZERO
//! network or database dependencies; only the export adapter writes files.
//!
//! # Modules
//!
//! - `snapshot` - Raw snapshot model and content hash
//! - `classify` - Label classification and pattern lookups
//! - `extract` - Per-section amount extractors
//! - `ledger` - Running balance ledger
//! - `summary` - Monthly aggregation, cache and engine facade
//! - `chart` - Chart-of-accounts footer rows
//! - `render` - Grid, accordion, bank-statement and yearly views
//! - `export` - Paginated document export

pub mod chart;
pub mod classify;
pub mod export;
pub mod extract;
pub mod ledger;
pub mod render;
pub mod snapshot;
pub mod summary;

#[cfg(test)]
mod fixtures;

pub use summary::{MonthlyAggregation, StatementEngine};
