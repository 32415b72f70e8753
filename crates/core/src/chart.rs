//! Chart-of-accounts footer.
//!
//! Cooperative-wide totals are shown exactly as supplied. They are never
//! recomputed from, or checked against, the member's running balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::render::format;
use crate::snapshot::ChartOfAccounts;

/// One footer row: a caption and its formatted amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Caption shown in the first cell.
    pub label: String,
    /// Raw amount.
    pub amount: Decimal,
    /// Amount formatted for display.
    pub value: String,
}

impl ChartRow {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
            value: format::amount(amount),
        }
    }
}

/// Formats the chart of accounts into footer rows.
///
/// Scalar totals come first, then savings per type, then loans outstanding
/// per type, all in input order. No chart yields no rows.
#[must_use]
pub fn footer_rows(chart: Option<&ChartOfAccounts>) -> Vec<ChartRow> {
    let Some(chart) = chart else {
        return Vec::new();
    };

    let mut rows = vec![
        ChartRow::new("Total Savings", chart.total_savings),
        ChartRow::new("Total Savings Deposits", chart.total_savings_deposits),
        ChartRow::new("Total Loans", chart.total_loans),
        ChartRow::new("Total Ventures", chart.total_ventures),
    ];

    rows.extend(chart.total_savings_by_type.iter().map(|total| {
        ChartRow::new(
            format!("Savings: {}", format::label(&total.label)),
            total.amount,
        )
    }));
    rows.extend(chart.total_loans_by_type.iter().map(|total| {
        ChartRow::new(
            format!("Loans Outstanding: {}", format::label(&total.loan_type)),
            total.total_outstanding_amount,
        )
    }));

    rows
}
