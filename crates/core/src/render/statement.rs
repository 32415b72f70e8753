//! Fixed bank-statement layout.
//!
//! Sixteen data columns in five groups:
//!
//! | Group            | Columns                              | Source                         |
//! |------------------|--------------------------------------|--------------------------------|
//! | Shares           | Balance                              | first Share Capital savings    |
//! | Deposits         | Received, Withdraw, Balance          | first Member Contribution      |
//! | Loans            | Loaned, Repaid, Balance, Interest    | every loan not an instant loan |
//! | Instant Loans    | Loaned, Repaid, Balance, Interest    | first Instant Loan             |
//! | Other Deductions | Holiday, Sodas, Guarantees, Total    | first Holiday / Sodas, guarantees |
//!
//! The predicates run against each month's own entries, so a month is
//! matched by whatever labels it carries. A month without a matching entry
//! shows zeros in that group; types that match no predicate are absent. A
//! "BF" row, matched against the first month, precedes the months.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format;
use super::outcome::RenderOutcome;
use crate::classify::{Bucket, Classifier, Section, find_by_bucket, sum_not_instant_loan};
use crate::summary::{Figures, MonthEntries, MonthEntry, MonthlyAggregation, MonthlySummary};

/// Number of data columns.
pub const STATEMENT_WIDTH: usize = 16;

/// Label of the brought-forward row.
pub const BF_LABEL: &str = "BF";

/// Column groups and their sub-columns.
pub const STATEMENT_GROUPS: &[(&str, &[&str])] = &[
    ("Shares", &["Balance"]),
    ("Deposits", &["Received", "Withdraw", "Balance"]),
    ("Loans", &["Loaned", "Repaid", "Balance", "Interest"]),
    ("Instant Loans", &["Loaned", "Repaid", "Balance", "Interest"]),
    ("Other Deductions", &["Holiday", "Sodas", "Guarantees", "Total"]),
];

/// Loan-like group values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanColumns {
    /// Amount loaned.
    pub loaned: Decimal,
    /// Amount repaid.
    pub repaid: Decimal,
    /// Running balance.
    pub balance: Decimal,
    /// Interest charged.
    pub interest: Decimal,
}

impl LoanColumns {
    fn from_figures(figures: &Figures) -> Self {
        Self {
            loaned: figures.disbursed,
            repaid: figures.repaid,
            balance: figures.balance,
            interest: figures.interest,
        }
    }
}

/// Deposit group values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositColumns {
    /// Amount received.
    pub received: Decimal,
    /// Amount withdrawn; the snapshot carries no withdrawals so this is zero.
    pub withdraw: Decimal,
    /// Running balance.
    pub balance: Decimal,
}

/// Other-deductions group values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionColumns {
    /// Holiday deduction.
    pub holiday: Decimal,
    /// Sodas deduction.
    pub sodas: Decimal,
    /// Active guaranteed balance.
    pub guarantees: Decimal,
}

impl DeductionColumns {
    /// Holiday + Sodas + Guarantees.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.holiday + self.sodas + self.guarantees
    }
}

/// One statement row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// "BF" or the month label.
    pub label: String,
    /// Share capital balance.
    pub shares: Decimal,
    /// Member contribution deposits.
    pub deposits: DepositColumns,
    /// Loans other than instant loans, summed.
    pub loans: LoanColumns,
    /// Instant loan.
    pub instant_loans: LoanColumns,
    /// Other deductions.
    pub other: DeductionColumns,
}

impl StatementLine {
    /// The sixteen values in column order.
    #[must_use]
    pub fn values(&self) -> [Decimal; STATEMENT_WIDTH] {
        [
            self.shares,
            self.deposits.received,
            self.deposits.withdraw,
            self.deposits.balance,
            self.loans.loaned,
            self.loans.repaid,
            self.loans.balance,
            self.loans.interest,
            self.instant_loans.loaned,
            self.instant_loans.repaid,
            self.instant_loans.balance,
            self.instant_loans.interest,
            self.other.holiday,
            self.other.sodas,
            self.other.guarantees,
            self.other.total(),
        ]
    }

    /// The sixteen values formatted for display.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        self.values().into_iter().map(format::amount).collect()
    }
}

/// The rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankStatement {
    /// Reporting year.
    pub year: Option<i32>,
    /// BF row followed by one row per month.
    pub lines: Vec<StatementLine>,
}

impl BankStatement {
    /// Flattened column captions, e.g. "Loans Repaid".
    #[must_use]
    pub fn header() -> Vec<String> {
        STATEMENT_GROUPS
            .iter()
            .flat_map(|(group, columns)| {
                columns.iter().map(move |column| format!("{group} {column}"))
            })
            .collect()
    }

    /// The brought-forward row.
    #[must_use]
    pub fn brought_forward(&self) -> Option<&StatementLine> {
        self.lines.first()
    }

    /// Month rows.
    #[must_use]
    pub fn months(&self) -> &[StatementLine] {
        self.lines.get(1..).unwrap_or_default()
    }
}

/// Entries of one month that the fixed predicates select.
struct Matches<'a> {
    shares: Option<&'a MonthEntry>,
    deposits: Option<&'a MonthEntry>,
    instant_loans: Option<&'a MonthEntry>,
    holiday: Option<(Section, &'a MonthEntry)>,
    sodas: Option<(Section, &'a MonthEntry)>,
}

impl<'a> Matches<'a> {
    fn resolve(entries: &'a MonthEntries, classifier: &Classifier) -> Self {
        // Deduction types may be savings or ventures; savings wins.
        let deduction = |bucket: Bucket| {
            find_by_bucket(&entries.savings, classifier, bucket)
                .map(|entry| (Section::Savings, entry))
                .or_else(|| {
                    find_by_bucket(&entries.ventures, classifier, bucket)
                        .map(|entry| (Section::Ventures, entry))
                })
        };

        Self {
            shares: find_by_bucket(&entries.savings, classifier, Bucket::ShareCapital),
            deposits: find_by_bucket(&entries.savings, classifier, Bucket::MemberContribution),
            instant_loans: find_by_bucket(&entries.loans, classifier, Bucket::InstantLoan),
            holiday: deduction(Bucket::Holiday),
            sodas: deduction(Bucket::Sodas),
        }
    }
}

fn opening_at(opening: &[Decimal], entry: Option<&MonthEntry>) -> Decimal {
    entry
        .and_then(|entry| opening.get(entry.position))
        .copied()
        .unwrap_or_default()
}

fn brought_forward_line(aggregation: &MonthlyAggregation, classifier: &Classifier) -> StatementLine {
    let bf = &aggregation.brought_forward;
    let Some(first) = aggregation.months.first() else {
        return StatementLine {
            label: BF_LABEL.to_string(),
            ..StatementLine::default()
        };
    };
    let matches = Matches::resolve(&first.entries, classifier);

    StatementLine {
        label: BF_LABEL.to_string(),
        shares: opening_at(&bf.savings, matches.shares),
        deposits: DepositColumns {
            balance: opening_at(&bf.savings, matches.deposits),
            ..DepositColumns::default()
        },
        loans: LoanColumns {
            balance: sum_not_instant_loan(&first.entries.loans, classifier, |entry| {
                opening_at(&bf.loans, Some(entry))
            }),
            ..LoanColumns::default()
        },
        instant_loans: LoanColumns {
            balance: opening_at(&bf.loans, matches.instant_loans),
            ..LoanColumns::default()
        },
        other: DeductionColumns::default(),
    }
}

/// Sums one loan figure over the month's loans that are not instant loans.
fn generic_loans<F>(month: &MonthlySummary, classifier: &Classifier, value: F) -> Decimal
where
    F: Fn(&Figures) -> Decimal,
{
    sum_not_instant_loan(&month.entries.loans, classifier, |entry| {
        value(&month.figures_of(Section::Loans, entry))
    })
}

fn month_line(month: &MonthlySummary, classifier: &Classifier) -> StatementLine {
    let matches = Matches::resolve(&month.entries, classifier);
    let figures = |section, entry: Option<&MonthEntry>| {
        entry.map_or_else(Figures::default, |entry| month.figures_of(section, entry))
    };
    let deduction = |slot: Option<(Section, &MonthEntry)>| {
        slot.map_or(Decimal::ZERO, |(section, entry)| {
            month.figures_of(section, entry).deposit
        })
    };
    let deposits = figures(Section::Savings, matches.deposits);

    StatementLine {
        label: format::optional_label(month.month.as_deref()),
        shares: figures(Section::Savings, matches.shares).balance,
        deposits: DepositColumns {
            received: deposits.deposit,
            withdraw: Decimal::ZERO,
            balance: deposits.balance,
        },
        loans: LoanColumns {
            loaned: generic_loans(month, classifier, |figures| figures.disbursed),
            repaid: generic_loans(month, classifier, |figures| figures.repaid),
            balance: generic_loans(month, classifier, |figures| figures.balance),
            interest: generic_loans(month, classifier, |figures| figures.interest),
        },
        instant_loans: LoanColumns::from_figures(&figures(Section::Loans, matches.instant_loans)),
        other: DeductionColumns {
            holiday: deduction(matches.holiday),
            sodas: deduction(matches.sodas),
            guarantees: month.guarantees.active_balance,
        },
    }
}

/// Renders the bank-statement layout, matching `classifier`'s statement
/// predicates against each month.
#[must_use]
pub fn bank_statement(
    aggregation: &MonthlyAggregation,
    classifier: &Classifier,
) -> RenderOutcome<BankStatement> {
    if aggregation.is_empty() {
        return RenderOutcome::no_data();
    }

    let mut lines = Vec::with_capacity(aggregation.months.len() + 1);
    lines.push(brought_forward_line(aggregation, classifier));
    lines.extend(
        aggregation
            .months
            .iter()
            .map(|month| month_line(month, classifier)),
    );

    RenderOutcome::Ready(BankStatement {
        year: aggregation.year,
        lines,
    })
}
