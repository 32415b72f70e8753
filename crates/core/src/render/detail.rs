//! Monthly detail grid and condensed summary grid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format;
use super::outcome::RenderOutcome;
use crate::classify::Section;
use crate::summary::{Figures, MonthlyAggregation};

/// Sub-column captions of a savings group.
pub const SAVINGS_COLUMNS: &[&str] = &["Deposit", "Balance"];
/// Sub-column captions of a venture group.
pub const VENTURE_COLUMNS: &[&str] = &["Deposit", "Payment", "Balance"];
/// Sub-column captions of a loan group.
pub const LOAN_COLUMNS: &[&str] = &["Disbursed", "Repaid", "Interest", "Outstanding"];

/// Sub-column captions for a section.
#[must_use]
pub fn sub_columns(section: Section) -> &'static [&'static str] {
    match section {
        Section::Savings => SAVINGS_COLUMNS,
        Section::Ventures => VENTURE_COLUMNS,
        Section::Loans => LOAN_COLUMNS,
    }
}

/// Where venture deposits and payments are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VentureSource {
    /// Sums of the line items.
    LineItems,
    /// The producer's pre-summed totals.
    Reported,
}

/// Values of one (section, type) for one month, in sub-column order.
pub(crate) fn values(section: Section, figures: &Figures, source: VentureSource) -> Vec<Decimal> {
    match section {
        Section::Savings => vec![figures.deposit, figures.balance],
        Section::Ventures => match source {
            VentureSource::LineItems => vec![figures.deposit, figures.payment, figures.balance],
            VentureSource::Reported => vec![
                figures.reported_deposit,
                figures.reported_payment,
                figures.balance,
            ],
        },
        Section::Loans => vec![
            figures.disbursed,
            figures.repaid,
            figures.interest,
            figures.outstanding,
        ],
    }
}

fn cells(section: Section, figures: &Figures, source: VentureSource) -> Vec<String> {
    values(section, figures, source)
        .into_iter()
        .map(format::amount)
        .collect()
}

/// Upper header cell: one per (section, type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    /// Section the group belongs to.
    pub section: Section,
    /// Type label.
    pub label: String,
    /// Lower header cells.
    pub columns: Vec<String>,
}

/// One month row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Month label.
    pub month: String,
    /// Formatted cells, aligned to the flattened header.
    pub cells: Vec<String>,
}

/// A grid with a two-level header and one row per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailGrid {
    /// Header groups in column order.
    pub header: Vec<HeaderGroup>,
    /// Month rows in snapshot order.
    pub rows: Vec<GridRow>,
}

impl DetailGrid {
    /// Number of data columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.iter().map(|group| group.columns.len()).sum()
    }

    /// Lower header flattened to single captions, e.g. "Holiday Deposit".
    #[must_use]
    pub fn flat_header(&self) -> Vec<String> {
        self.header
            .iter()
            .flat_map(|group| {
                group
                    .columns
                    .iter()
                    .map(move |column| format!("{} {column}", group.label))
            })
            .collect()
    }

    /// Cells of one (section, type) group in a given row.
    #[must_use]
    pub fn group_cells(&self, row: usize, section: Section, label: &str) -> Option<&[String]> {
        let mut offset = 0;
        for group in &self.header {
            if group.section == section && group.label == label {
                let end = offset + group.columns.len();
                return self.rows.get(row).and_then(|row| row.cells.get(offset..end));
            }
            offset += group.columns.len();
        }
        None
    }
}

fn grid(aggregation: &MonthlyAggregation, source: VentureSource) -> RenderOutcome<DetailGrid> {
    if aggregation.is_empty() {
        return RenderOutcome::no_data();
    }

    let header = Section::ALL
        .iter()
        .flat_map(|section| {
            aggregation
                .universe
                .section(*section)
                .iter()
                .map(move |column| HeaderGroup {
                    section: *section,
                    label: format::label(&column.label),
                    columns: sub_columns(*section)
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                })
        })
        .collect();

    let rows = aggregation
        .months
        .iter()
        .map(|month| GridRow {
            month: format::optional_label(month.month.as_deref()),
            cells: Section::ALL
                .iter()
                .flat_map(|section| {
                    month
                        .section(*section)
                        .iter()
                        .flat_map(move |figures| cells(*section, figures, source))
                })
                .collect(),
        })
        .collect();

    RenderOutcome::Ready(DetailGrid { header, rows })
}

/// Renders the monthly detail grid.
#[must_use]
pub fn detail_grid(aggregation: &MonthlyAggregation) -> RenderOutcome<DetailGrid> {
    grid(aggregation, VentureSource::LineItems)
}

/// Renders the condensed summary grid.
///
/// Same shape as the detail grid; venture deposits and payments come from
/// the producer's pre-summed totals.
#[must_use]
pub fn condensed_grid(aggregation: &MonthlyAggregation) -> RenderOutcome<DetailGrid> {
    grid(aggregation, VentureSource::Reported)
}
