//! Yearly roll-up with the chart-of-accounts footer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format;
use super::outcome::RenderOutcome;
use crate::chart::{ChartRow, footer_rows};
use crate::classify::{Bucket, Section};
use crate::snapshot::ChartOfAccounts;
use crate::summary::MonthlyAggregation;

/// Year totals of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Type label.
    pub label: String,
    /// Bucket of the type.
    pub bucket: Bucket,
    /// Opening balance from the BF row.
    pub brought_forward: Decimal,
    /// Sum of deposits.
    pub deposits: Decimal,
    /// Sum of payments.
    pub payments: Decimal,
    /// Sum of disbursements.
    pub disbursed: Decimal,
    /// Sum of repayments.
    pub repaid: Decimal,
    /// Sum of interest.
    pub interest: Decimal,
    /// Carried-forward balance after the last month.
    pub closing_balance: Decimal,
    /// Outstanding amount reported in the last month.
    pub outstanding: Decimal,
}

impl YearlyRow {
    /// Formatted cells for the section's columns.
    #[must_use]
    pub fn cells(&self, section: Section) -> Vec<String> {
        let values = match section {
            Section::Savings => vec![self.brought_forward, self.deposits, self.closing_balance],
            Section::Ventures => vec![
                self.brought_forward,
                self.deposits,
                self.payments,
                self.closing_balance,
            ],
            Section::Loans => vec![
                self.brought_forward,
                self.disbursed,
                self.repaid,
                self.interest,
                self.closing_balance,
                self.outstanding,
            ],
        };
        values.into_iter().map(format::amount).collect()
    }
}

/// Column captions of a yearly section table.
#[must_use]
pub fn yearly_columns(section: Section) -> &'static [&'static str] {
    match section {
        Section::Savings => &["BF", "Deposits", "Closing Balance"],
        Section::Ventures => &["BF", "Deposits", "Payments", "Closing Balance"],
        Section::Loans => &[
            "BF",
            "Disbursed",
            "Repaid",
            "Interest",
            "Closing Balance",
            "Outstanding",
        ],
    }
}

/// Year totals of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySection {
    /// Which section.
    pub section: Section,
    /// One row per type in column order.
    pub rows: Vec<YearlyRow>,
}

/// The yearly roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRollup {
    /// Reporting year.
    pub year: Option<i32>,
    /// Savings, ventures and loans, in that order.
    pub sections: Vec<YearlySection>,
    /// Chart-of-accounts footer rows.
    pub footer: Vec<ChartRow>,
}

impl YearlyRollup {
    /// Row of one type.
    #[must_use]
    pub fn row(&self, section: Section, label: &str) -> Option<&YearlyRow> {
        self.sections
            .iter()
            .find(|candidate| candidate.section == section)
            .and_then(|candidate| candidate.rows.iter().find(|row| row.label == label))
    }
}

/// Renders the yearly roll-up.
#[must_use]
pub fn yearly_rollup(
    aggregation: &MonthlyAggregation,
    chart: Option<&ChartOfAccounts>,
) -> RenderOutcome<YearlyRollup> {
    if aggregation.is_empty() {
        return RenderOutcome::no_data();
    }

    let sections = Section::ALL
        .iter()
        .map(|section| {
            let opening = aggregation.brought_forward.section(*section);
            let rows = aggregation
                .universe
                .section(*section)
                .iter()
                .enumerate()
                .map(|(position, column)| {
                    let column_figures = aggregation
                        .months
                        .iter()
                        .filter_map(|month| month.section(*section).get(position));
                    let mut row = YearlyRow {
                        label: format::label(&column.label),
                        bucket: column.bucket,
                        brought_forward: opening.get(position).copied().unwrap_or_default(),
                        deposits: Decimal::ZERO,
                        payments: Decimal::ZERO,
                        disbursed: Decimal::ZERO,
                        repaid: Decimal::ZERO,
                        interest: Decimal::ZERO,
                        closing_balance: Decimal::ZERO,
                        outstanding: Decimal::ZERO,
                    };
                    for figures in column_figures {
                        row.deposits += figures.deposit;
                        row.payments += figures.payment;
                        row.disbursed += figures.disbursed;
                        row.repaid += figures.repaid;
                        row.interest += figures.interest;
                        row.closing_balance = figures.balance;
                        row.outstanding = figures.outstanding;
                    }
                    row
                })
                .collect();

            YearlySection {
                section: *section,
                rows,
            }
        })
        .collect();

    RenderOutcome::Ready(YearlyRollup {
        year: aggregation.year,
        sections,
        footer: footer_rows(chart),
    })
}
