//! Normalized aggregation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::{Bucket, Section};
use crate::extract::GuaranteeAmounts;
use crate::snapshot::{Field, LabeledEntry};

/// One column group: a type label and the bucket it was classified into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeColumn {
    /// Raw type label.
    pub label: String,
    /// Classification of the label within its section.
    pub bucket: Bucket,
}

/// Distinct type labels per section across all months of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeUniverse {
    /// Savings columns.
    pub savings: Vec<TypeColumn>,
    /// Venture columns.
    pub ventures: Vec<TypeColumn>,
    /// Loan columns.
    pub loans: Vec<TypeColumn>,
}

impl TypeUniverse {
    /// Columns of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[TypeColumn] {
        match section {
            Section::Savings => &self.savings,
            Section::Ventures => &self.ventures,
            Section::Loans => &self.loans,
        }
    }

    /// Position of `label` within a section.
    #[must_use]
    pub fn position(&self, section: Section, label: &str) -> Option<usize> {
        self.section(section)
            .iter()
            .position(|column| column.label == label)
    }

    /// Labels of one section, in column order.
    #[must_use]
    pub fn labels(&self, section: Section) -> Vec<String> {
        self.section(section)
            .iter()
            .map(|column| column.label.clone())
            .collect()
    }

    /// Total number of columns across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.savings.len() + self.ventures.len() + self.loans.len()
    }

    /// Returns true when no section has any type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every derived number for one (month, section, type).
///
/// Fields that do not apply to a section stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figures {
    /// Deposits (savings, ventures).
    pub deposit: Decimal,
    /// Payments (ventures).
    pub payment: Decimal,
    /// Carried-forward running balance.
    pub balance: Decimal,
    /// Disbursed (loans).
    pub disbursed: Decimal,
    /// Repaid (loans).
    pub repaid: Decimal,
    /// Interest charged (loans).
    pub interest: Decimal,
    /// Producer-reported outstanding (loans).
    pub outstanding: Decimal,
    /// Producer's pre-summed deposits (ventures).
    pub reported_deposit: Decimal,
    /// Producer's pre-summed payments (ventures).
    pub reported_payment: Decimal,
}

/// A type that has an entry in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// Raw type label.
    pub label: String,
    /// Column position of the label in its section of the universe.
    pub position: usize,
}

/// Amounts live in the month's [`Figures`]; a month entry only carries the
/// label the statement predicates run against.
impl LabeledEntry for MonthEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn field(&self, _field: Field) -> Option<Decimal> {
        None
    }
}

/// Types present in one month, per section, in snapshot order.
///
/// A label repeated within a month appears once, at its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntries {
    /// Savings types.
    pub savings: Vec<MonthEntry>,
    /// Venture types.
    pub ventures: Vec<MonthEntry>,
    /// Loan types.
    pub loans: Vec<MonthEntry>,
}

impl MonthEntries {
    /// Entries of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[MonthEntry] {
        match section {
            Section::Savings => &self.savings,
            Section::Ventures => &self.ventures,
            Section::Loans => &self.loans,
        }
    }
}

/// One month of normalized figures, aligned to the [`TypeUniverse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Position of the month in the snapshot.
    pub index: usize,
    /// Month label as supplied.
    pub month: Option<String>,
    /// Savings figures, one per savings column.
    pub savings: Vec<Figures>,
    /// Venture figures, one per venture column.
    pub ventures: Vec<Figures>,
    /// Loan figures, one per loan column.
    pub loans: Vec<Figures>,
    /// Guarantee figures.
    pub guarantees: GuaranteeAmounts,
    /// Types that have an entry this month.
    pub entries: MonthEntries,
}

impl MonthlySummary {
    /// Figures of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Figures] {
        match section {
            Section::Savings => &self.savings,
            Section::Ventures => &self.ventures,
            Section::Loans => &self.loans,
        }
    }

    /// Figures of the type a month entry points at.
    #[must_use]
    pub fn figures_of(&self, section: Section, entry: &MonthEntry) -> Figures {
        self.section(section)
            .get(entry.position)
            .copied()
            .unwrap_or_default()
    }
}

/// Opening balances taken from the first month's raw
/// `balance_brought_forward` fields, aligned to the [`TypeUniverse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroughtForward {
    /// Savings opening balances.
    pub savings: Vec<Decimal>,
    /// Venture opening balances.
    pub ventures: Vec<Decimal>,
    /// Loan opening balances.
    pub loans: Vec<Decimal>,
    /// Guarantee figures of the first month.
    pub guarantees: GuaranteeAmounts,
}

impl BroughtForward {
    /// Opening balances of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Decimal] {
        match section {
            Section::Savings => &self.savings,
            Section::Ventures => &self.ventures,
            Section::Loans => &self.loans,
        }
    }
}

/// The single shared output every renderer and exporter reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregation {
    /// Reporting year.
    pub year: Option<i32>,
    /// Content hash of the snapshot this was built from.
    pub snapshot_hash: String,
    /// Column universe.
    pub universe: TypeUniverse,
    /// One summary per month, in snapshot order.
    pub months: Vec<MonthlySummary>,
    /// Brought-forward row.
    pub brought_forward: BroughtForward,
}

impl MonthlyAggregation {
    /// Returns true when the snapshot had no months.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Figures for (month, section, type), if the type is in the universe.
    #[must_use]
    pub fn lookup(&self, month_index: usize, section: Section, label: &str) -> Option<&Figures> {
        let position = self.universe.position(section, label)?;
        self.months
            .get(month_index)
            .and_then(|month| month.section(section).get(position))
    }

    /// Figures for (month, section, type), all zero when absent.
    #[must_use]
    pub fn figures(&self, month_index: usize, section: Section, label: &str) -> Figures {
        self.lookup(month_index, section, label)
            .copied()
            .unwrap_or_default()
    }
}
