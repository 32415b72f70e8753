//! Monthly aggregation builder.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use coop_shared::config::ColumnPriority;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{
    BroughtForward, Figures, MonthEntries, MonthEntry, MonthlyAggregation, MonthlySummary,
    TypeUniverse,
};
use crate::classify::{Classifier, Section, extract_field};
use crate::extract;
use crate::ledger::{BalanceTimeline, RunningBalanceLedger};
use crate::snapshot::{
    Field, LabeledEntry, LoanTypeEntry, RawMonthSnapshot, SavingsTypeEntry, StatementSnapshot,
    VentureTypeEntry,
};

/// First entry per label within one month.
///
/// Later duplicates of a label in the same month are ignored.
fn index_first<E: LabeledEntry>(entries: &[E]) -> HashMap<&str, &E> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        index.entry(entry.label()).or_insert(entry);
    }
    index
}

/// Distinct labels of one month's entries, first occurrence first, with
/// their universe positions.
fn present<E: LabeledEntry>(
    entries: &[E],
    universe: &TypeUniverse,
    section: Section,
) -> Vec<MonthEntry> {
    let mut present: Vec<MonthEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.label();
        if present.iter().any(|seen| seen.label == label) {
            continue;
        }
        if let Some(position) = universe.position(section, label) {
            present.push(MonthEntry {
                label: label.to_string(),
                position,
            });
        }
    }
    present
}

/// Per-month entry indexes for all three sections.
struct MonthIndex<'a> {
    savings: HashMap<&'a str, &'a SavingsTypeEntry>,
    ventures: HashMap<&'a str, &'a VentureTypeEntry>,
    loans: HashMap<&'a str, &'a LoanTypeEntry>,
}

impl<'a> MonthIndex<'a> {
    fn new(month: &'a RawMonthSnapshot) -> Self {
        Self {
            savings: index_first(&month.savings.by_type),
            ventures: index_first(&month.ventures.by_type),
            loans: index_first(&month.loans.by_type),
        }
    }

    fn savings(&self, label: &str) -> extract::SavingsAmounts {
        extract::savings(self.savings.get(label).copied())
    }

    fn ventures(&self, label: &str) -> extract::VentureAmounts {
        extract::ventures(self.ventures.get(label).copied())
    }

    fn loans(&self, label: &str) -> extract::LoanAmounts {
        extract::loans(self.loans.get(label).copied())
    }
}

/// Builds a [`MonthlyAggregation`] from a raw snapshot.
///
/// Classification happens once per distinct label while the universe is
/// derived; the month pass only reads amounts and posts movements.
#[derive(Debug, Clone, Copy)]
pub struct AggregationBuilder<'a> {
    classifier: &'a Classifier,
    priority: &'a ColumnPriority,
}

impl<'a> AggregationBuilder<'a> {
    /// Creates a builder from a compiled classifier and column priority.
    #[must_use]
    pub fn new(classifier: &'a Classifier, priority: &'a ColumnPriority) -> Self {
        Self {
            classifier,
            priority,
        }
    }

    /// Cache key for `snapshot_hash` built with this classifier and column
    /// order.
    ///
    /// Builders configured differently never share a key for the same
    /// snapshot.
    #[must_use]
    pub fn cache_key(&self, snapshot_hash: &str) -> String {
        let mut hasher = DefaultHasher::new();
        self.classifier.hash(&mut hasher);
        self.priority.hash(&mut hasher);
        format!("{:016x}-{snapshot_hash}", hasher.finish())
    }

    /// Runs the single forward pass over the snapshot's months.
    #[must_use]
    pub fn build(&self, snapshot: &StatementSnapshot) -> MonthlyAggregation {
        self.build_hashed(snapshot, snapshot.content_hash())
    }

    /// Like [`AggregationBuilder::build`] with the snapshot's content hash
    /// already computed.
    #[must_use]
    pub fn build_hashed(
        &self,
        snapshot: &StatementSnapshot,
        snapshot_hash: String,
    ) -> MonthlyAggregation {
        let months = &snapshot.monthly_summary;
        let universe = TypeUniverse::derive(months, self.classifier, self.priority);
        let indexes: Vec<MonthIndex<'_>> = months.iter().map(MonthIndex::new).collect();

        let savings_timeline = run_ledger(&universe, Section::Savings, &indexes, |index, label| {
            index.savings(label).deposit
        });
        let ventures_timeline = run_ledger(&universe, Section::Ventures, &indexes, |index, label| {
            index.ventures(label).net()
        });
        let loans_timeline = run_ledger(&universe, Section::Loans, &indexes, |index, label| {
            index.loans(label).net()
        });

        let summaries: Vec<MonthlySummary> = months
            .iter()
            .zip(&indexes)
            .enumerate()
            .map(|(i, (month, index))| MonthlySummary {
                index: i,
                month: month.month.clone(),
                savings: universe
                    .savings
                    .iter()
                    .map(|column| {
                        let amounts = index.savings(&column.label);
                        Figures {
                            deposit: amounts.deposit,
                            balance: savings_timeline.balance(&column.label, i),
                            ..Figures::default()
                        }
                    })
                    .collect(),
                ventures: universe
                    .ventures
                    .iter()
                    .map(|column| {
                        let amounts = index.ventures(&column.label);
                        Figures {
                            deposit: amounts.deposit,
                            payment: amounts.payment,
                            balance: ventures_timeline.balance(&column.label, i),
                            reported_deposit: amounts.reported_deposit,
                            reported_payment: amounts.reported_payment,
                            ..Figures::default()
                        }
                    })
                    .collect(),
                loans: universe
                    .loans
                    .iter()
                    .map(|column| {
                        let amounts = index.loans(&column.label);
                        Figures {
                            balance: loans_timeline.balance(&column.label, i),
                            disbursed: amounts.disbursed,
                            repaid: amounts.repaid,
                            interest: amounts.interest,
                            outstanding: amounts.outstanding,
                            ..Figures::default()
                        }
                    })
                    .collect(),
                guarantees: extract::guarantees(Some(&month.guarantees)),
                entries: MonthEntries {
                    savings: present(&month.savings.by_type, &universe, Section::Savings),
                    ventures: present(&month.ventures.by_type, &universe, Section::Ventures),
                    loans: present(&month.loans.by_type, &universe, Section::Loans),
                },
            })
            .collect();

        let brought_forward = brought_forward(&universe, months.first());

        debug!(
            months = summaries.len(),
            savings_types = universe.savings.len(),
            venture_types = universe.ventures.len(),
            loan_types = universe.loans.len(),
            "Monthly aggregation built"
        );

        MonthlyAggregation {
            year: snapshot.year,
            snapshot_hash,
            universe,
            months: summaries,
            brought_forward,
        }
    }
}

fn run_ledger<F>(
    universe: &TypeUniverse,
    section: Section,
    indexes: &[MonthIndex<'_>],
    movement: F,
) -> BalanceTimeline
where
    F: Fn(&MonthIndex<'_>, &str) -> Decimal,
{
    let mut ledger = RunningBalanceLedger::new(universe.labels(section));
    for index in indexes {
        ledger.post_month(|label| movement(index, label));
    }
    ledger.finish()
}

/// Opening balances from the first month; types absent there open at zero.
fn brought_forward(universe: &TypeUniverse, first: Option<&RawMonthSnapshot>) -> BroughtForward {
    let Some(first) = first else {
        return BroughtForward::default();
    };
    let index = MonthIndex::new(first);

    BroughtForward {
        savings: universe
            .savings
            .iter()
            .map(|column| {
                let entry = index.savings.get(column.label.as_str()).copied();
                extract_field(entry, Field::BalanceBroughtForward)
            })
            .collect(),
        ventures: universe
            .ventures
            .iter()
            .map(|column| {
                let entry = index.ventures.get(column.label.as_str()).copied();
                extract_field(entry, Field::BalanceBroughtForward)
            })
            .collect(),
        loans: universe
            .loans
            .iter()
            .map(|column| {
                let entry = index.loans.get(column.label.as_str()).copied();
                extract_field(entry, Field::BalanceBroughtForward)
            })
            .collect(),
        guarantees: extract::guarantees(Some(&first.guarantees)),
    }
}
