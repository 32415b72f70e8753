//! Per-type running balance entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running balance of one type after one month.
///
/// - previous_balance: carried-forward balance of the prior month (0 before
///   the first month)
/// - movement: net movement posted in this month
/// - current_balance: carried-forward balance of this month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    /// Position of the month in the snapshot.
    pub month_index: usize,
    /// Balance before this month.
    pub previous_balance: Decimal,
    /// Net movement in this month.
    pub movement: Decimal,
    /// Balance after this month.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Creates the running balance for the first month.
    #[must_use]
    pub fn first_entry(movement: Decimal) -> Self {
        Self {
            month_index: 0,
            previous_balance: Decimal::ZERO,
            movement,
            current_balance: movement,
        }
    }

    /// Creates the running balance for the month after `previous`.
    ///
    /// - current_balance[N] = previous_balance[N] + movement
    /// - previous_balance[N] = current_balance[N-1]
    #[must_use]
    pub fn next_entry(previous: &Self, movement: Decimal) -> Self {
        Self {
            month_index: previous.month_index + 1,
            previous_balance: previous.current_balance,
            movement,
            current_balance: previous.current_balance + movement,
        }
    }
}
