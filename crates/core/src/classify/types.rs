//! Reporting buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ClassifyError;

/// Display bucket a raw type label is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Share capital savings.
    ShareCapital,
    /// Member contribution (deposit) savings.
    MemberContribution,
    /// Any loan that is not an instant loan.
    Loan,
    /// Instant loans.
    InstantLoan,
    /// Holiday savings.
    Holiday,
    /// Sodas savings.
    Sodas,
    /// Anything not covered by a rule.
    Other,
}

impl Bucket {
    /// Every bucket, in statement column order.
    pub const ALL: [Self; 7] = [
        Self::ShareCapital,
        Self::MemberContribution,
        Self::Loan,
        Self::InstantLoan,
        Self::Holiday,
        Self::Sodas,
        Self::Other,
    ];

    /// Configuration name of the bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShareCapital => "share_capital",
            Self::MemberContribution => "member_contribution",
            Self::Loan => "loan",
            Self::InstantLoan => "instant_loan",
            Self::Holiday => "holiday",
            Self::Sodas => "sodas",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == normalized)
            .ok_or_else(|| ClassifyError::UnknownBucket(s.to_string()))
    }
}
