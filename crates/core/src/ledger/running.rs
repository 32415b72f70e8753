//! Forward pass over the month sequence.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::balance::RunningBalance;

/// Current cumulative balance per type label.
///
/// Local to a single aggregation pass. Seeded at zero for every label and
/// only ever advanced forward.
#[derive(Debug, Clone, Default)]
pub struct RunningBalanceState {
    balances: HashMap<String, Decimal>,
}

impl RunningBalanceState {
    /// Seeds every label at zero.
    fn seeded<'a>(labels: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            balances: labels
                .into_iter()
                .map(|label| (label.clone(), Decimal::ZERO))
                .collect(),
        }
    }

    /// Current balance for `label`, zero when unknown.
    #[must_use]
    pub fn get(&self, label: &str) -> Decimal {
        self.balances.get(label).copied().unwrap_or(Decimal::ZERO)
    }

    fn apply(&mut self, label: &str, movement: Decimal) -> Decimal {
        let balance = self.balances.entry(label.to_string()).or_insert(Decimal::ZERO);
        *balance += movement;
        *balance
    }
}

/// Single-section running balance ledger.
///
/// Every label in the section's universe gets one [`RunningBalance`] per
/// posted month, including months with no activity for that label.
#[derive(Debug, Clone)]
pub struct RunningBalanceLedger {
    labels: Vec<String>,
    state: RunningBalanceState,
    history: Vec<Vec<RunningBalance>>,
}

impl RunningBalanceLedger {
    /// Creates a ledger for the given labels, all seeded at zero.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let state = RunningBalanceState::seeded(&labels);
        let history = vec![Vec::new(); labels.len()];
        Self {
            labels,
            state,
            history,
        }
    }

    /// Posts one month. `movement_of` returns the label's net movement,
    /// which should be zero for labels without an entry this month.
    pub fn post_month<F>(&mut self, movement_of: F)
    where
        F: Fn(&str) -> Decimal,
    {
        for (label, history) in self.labels.iter().zip(self.history.iter_mut()) {
            let movement = movement_of(label);
            let entry = match history.last() {
                Some(previous) => RunningBalance::next_entry(previous, movement),
                None => RunningBalance::first_entry(movement),
            };
            let applied = self.state.apply(label, movement);
            debug_assert_eq!(applied, entry.current_balance);
            history.push(entry);
        }
    }

    /// The live state of the pass.
    #[must_use]
    pub fn state(&self) -> &RunningBalanceState {
        &self.state
    }

    /// Finishes the pass and returns the per-month history.
    #[must_use]
    pub fn finish(self) -> BalanceTimeline {
        let index = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        BalanceTimeline {
            index,
            history: self.history,
        }
    }
}

/// Carried-forward balances of every label for every month of a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceTimeline {
    index: HashMap<String, usize>,
    history: Vec<Vec<RunningBalance>>,
}

impl BalanceTimeline {
    /// Every running balance posted for `label`, in month order.
    #[must_use]
    pub fn entries(&self, label: &str) -> &[RunningBalance] {
        self.index
            .get(label)
            .and_then(|i| self.history.get(*i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Carried-forward balance of `label` after month `month_index`.
    ///
    /// Zero for unknown labels or months outside the pass.
    #[must_use]
    pub fn balance(&self, label: &str, month_index: usize) -> Decimal {
        self.entries(label)
            .get(month_index)
            .map_or(Decimal::ZERO, |entry| entry.current_balance)
    }

    /// Balance of `label` after the last posted month.
    #[must_use]
    pub fn closing(&self, label: &str) -> Decimal {
        self.entries(label)
            .last()
            .map_or(Decimal::ZERO, |entry| entry.current_balance)
    }
}
