//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Statement classification and layout configuration.
    #[serde(default)]
    pub statement: StatementConfig,
    /// Aggregation cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Document export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

/// A single label classification rule.
///
/// Rules are evaluated in order; the first pattern that matches a type label
/// (case-insensitively) decides the label's bucket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassificationRule {
    /// Bucket name (e.g. "share_capital", "instant_loan").
    pub bucket: String,
    /// Regular expression matched against the raw type label.
    pub pattern: String,
}

impl ClassificationRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(bucket: &str, pattern: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Declared column ordering per statement section.
///
/// Labels listed here come first, in this order; anything else follows in
/// the order it was first seen in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct ColumnPriority {
    /// Savings type labels.
    #[serde(default)]
    pub savings: Vec<String>,
    /// Venture type labels.
    #[serde(default)]
    pub ventures: Vec<String>,
    /// Loan type labels.
    #[serde(default)]
    pub loans: Vec<String>,
}

/// Statement configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementConfig {
    /// Ordered classification rules.
    #[serde(default = "default_classification")]
    pub classification: Vec<ClassificationRule>,
    /// Declared column order.
    #[serde(default)]
    pub column_priority: ColumnPriority,
    /// Reporting currency code used in document headers.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            classification: default_classification(),
            column_priority: ColumnPriority::default(),
            currency: default_currency(),
        }
    }
}

/// Label patterns used by the fixed bank-statement layout.
///
/// Loan labels matching none of these fall into the generic loan bucket.
#[must_use]
pub fn default_classification() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new("share_capital", "Share Capital"),
        ClassificationRule::new("member_contribution", "Member Contribution"),
        ClassificationRule::new("instant_loan", "Instant Loan"),
        ClassificationRule::new("holiday", "Holiday"),
        ClassificationRule::new("sodas", "Sodas"),
    ]
}

fn default_currency() -> String {
    "KES".to_string()
}

/// Aggregation cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached aggregations.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Time-to-live of a cached aggregation in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_max_capacity() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

/// Document export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory generated documents are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Table rows per page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    /// Organization name printed in the document header.
    #[serde(default = "default_organization_name")]
    pub organization_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            rows_per_page: default_rows_per_page(),
            organization_name: default_organization_name(),
        }
    }
}

fn default_output_dir() -> String {
    "statements".to_string()
}

fn default_rows_per_page() -> usize {
    20
}

fn default_organization_name() -> String {
    "Savings Cooperative".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COOP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
