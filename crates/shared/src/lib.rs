//! Shared types, errors, and configuration for the statement engine.
//!
//! This crate provides common types used across all other crates:
//! - Lenient decimal parsing and display formatting for amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
