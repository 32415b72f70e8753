//! Rule-based label classification.

use std::hash::{Hash, Hasher};

use coop_shared::config::{ClassificationRule, default_classification};
use regex::{Regex, RegexBuilder};

use super::error::ClassifyError;
use super::types::Bucket;

/// Section of a monthly record a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Savings products.
    Savings,
    /// Venture products.
    Ventures,
    /// Loan products.
    Loans,
}

impl Section {
    /// Every section, in column-group order.
    pub const ALL: [Self; 3] = [Self::Savings, Self::Ventures, Self::Loans];

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Ventures => "Ventures",
            Self::Loans => "Loans",
        }
    }
}

/// Compiles a case-insensitive label pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ClassifyError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ClassifyError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[derive(Debug, Clone)]
struct CompiledRule {
    bucket: Bucket,
    pattern: Regex,
}

/// Maps free-text type labels to reporting buckets.
///
/// Rules are compiled once; the first matching rule wins and labels that
/// match nothing fall back to [`Bucket::Other`].
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Builds a classifier from configured rules.
    pub fn from_rules(rules: &[ClassificationRule]) -> Result<Self, ClassifyError> {
        let rules = rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    bucket: rule.bucket.parse()?,
                    pattern: compile_pattern(&rule.pattern)?,
                })
            })
            .collect::<Result<Vec<_>, ClassifyError>>()?;

        Ok(Self { rules })
    }

    /// The classifier for the standard statement patterns.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in patterns are plain literals.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules(&default_classification()).expect("built-in patterns are valid")
    }

    /// Classifies a label regardless of section.
    #[must_use]
    pub fn classify(&self, label: &str) -> Bucket {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(label))
            .map_or(Bucket::Other, |rule| rule.bucket)
    }

    /// Classifies a label within a section.
    ///
    /// A loan is an instant loan when the instant-loan pattern matches its
    /// label, whatever other rules come first; every other loan lands in
    /// [`Bucket::Loan`]. Loan buckets never apply outside the loans section.
    #[must_use]
    pub fn classify_in(&self, section: Section, label: &str) -> Bucket {
        match section {
            Section::Loans if self.is_instant_loan(label) => Bucket::InstantLoan,
            Section::Loans => Bucket::Loan,
            _ => match self.classify(label) {
                Bucket::Loan | Bucket::InstantLoan => Bucket::Other,
                bucket => bucket,
            },
        }
    }

    /// Returns true when the instant-loan pattern matches `label`.
    #[must_use]
    pub fn is_instant_loan(&self, label: &str) -> bool {
        self.pattern_for(Bucket::InstantLoan)
            .is_some_and(|pattern| pattern.is_match(label))
    }

    /// The first configured pattern for `bucket`, if any.
    #[must_use]
    pub fn pattern_for(&self, bucket: Bucket) -> Option<&Regex> {
        self.rules
            .iter()
            .find(|rule| rule.bucket == bucket)
            .map(|rule| &rule.pattern)
    }
}

/// Hashes the rule table: bucket and pattern source, in order.
impl Hash for Classifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for rule in &self.rules {
            rule.bucket.hash(state);
            rule.pattern.as_str().hash(state);
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}
