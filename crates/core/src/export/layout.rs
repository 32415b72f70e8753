//! Paginated table layout.
//!
//! Every page carries the header block, the table header and a
//! "Page n of m" footer; table rows are split across pages at a fixed
//! count per page, lowered to what fits above the footer.

use tracing::debug;

use super::backend::{DocumentBackend, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, Weight};
use super::error::ExportError;

const MARGIN: u16 = 24;
const TITLE_SIZE: u8 = 14;
const HEADER_SIZE: u8 = 9;
const TABLE_SIZE: u8 = 7;
const LINE_HEIGHT: u16 = 12;
const ROW_HEIGHT: u16 = 11;
const LABEL_WIDTH: u16 = 70;

/// Line printed in place of the table when there are no rows.
pub const NO_TRANSACTIONS: &str = "No transactions for this period";

/// A column-group caption spanning `span` data columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// Caption.
    pub caption: String,
    /// Number of data columns covered.
    pub span: usize,
}

/// A document made of a header block and one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDocument {
    /// First header line, printed bold.
    pub title: String,
    /// Further header lines (member identity, report date, currency).
    pub header_lines: Vec<String>,
    /// Caption of the row-label column.
    pub label_caption: String,
    /// Upper header row.
    pub groups: Vec<ColumnGroup>,
    /// Lower header row, one caption per data column.
    pub columns: Vec<String>,
    /// Table rows: a label and one cell per data column.
    pub rows: Vec<(String, Vec<String>)>,
}

/// Number of pages `rows` occupy at `rows_per_page`; an empty table still
/// takes one page.
#[must_use]
pub fn page_count(rows: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    rows.div_ceil(rows_per_page).max(1)
}

fn to_points(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Baseline of the first table row, below the header block and both
/// table header rows.
fn first_row_y(header_lines: usize) -> usize {
    let fixed = usize::from(MARGIN + LINE_HEIGHT)
        + usize::from(LINE_HEIGHT + 4)
        + usize::from(LINE_HEIGHT)
        + 2 * usize::from(ROW_HEIGHT);
    fixed.saturating_add(header_lines.saturating_mul(usize::from(LINE_HEIGHT)))
}

/// Number of table rows that fit between the table header and the footer.
#[must_use]
pub fn row_capacity(header_lines: usize) -> usize {
    let last_row_y = usize::from(PAGE_HEIGHT_PT - MARGIN - LINE_HEIGHT);
    let first = first_row_y(header_lines);
    if first > last_row_y {
        return 0;
    }
    (last_row_y - first) / usize::from(ROW_HEIGHT) + 1
}

/// Width of one data column, sharing the space right of the label column.
fn column_width(columns: usize) -> u16 {
    let usable = PAGE_WIDTH_PT - 2 * MARGIN - LABEL_WIDTH;
    usable / to_points(columns.max(1))
}

fn column_x(index: usize, width: u16) -> u16 {
    MARGIN
        .saturating_add(LABEL_WIDTH)
        .saturating_add(width.saturating_mul(to_points(index)))
}

/// Draws the document through `backend` and returns its bytes and page count.
///
/// # Errors
///
/// Returns an error if `rows_per_page` is zero, the header block leaves no
/// room for a table row, or the backend fails.
pub fn draw<B: DocumentBackend>(
    document: &TableDocument,
    rows_per_page: usize,
    mut backend: B,
) -> Result<(Vec<u8>, usize), ExportError> {
    if rows_per_page == 0 {
        return Err(ExportError::Layout("rows per page must be positive".into()));
    }
    let capacity = row_capacity(document.header_lines.len());
    if capacity == 0 {
        return Err(ExportError::Layout(format!(
            "{} header lines leave no room for table rows",
            document.header_lines.len()
        )));
    }
    if rows_per_page > capacity {
        debug!(rows_per_page, capacity, "Rows per page lowered to page capacity");
    }
    let rows_per_page = rows_per_page.min(capacity);

    let pages = page_count(document.rows.len(), rows_per_page);
    let width = column_width(document.columns.len());

    for page in 0..pages {
        backend.begin_page()?;
        let mut y = MARGIN + LINE_HEIGHT;

        backend.text(MARGIN, y, TITLE_SIZE, Weight::Bold, &document.title)?;
        y += LINE_HEIGHT + 4;
        for line in &document.header_lines {
            backend.text(MARGIN, y, HEADER_SIZE, Weight::Regular, line)?;
            y += LINE_HEIGHT;
        }
        y += LINE_HEIGHT;

        if document.rows.is_empty() {
            backend.text(MARGIN, y, HEADER_SIZE, Weight::Regular, NO_TRANSACTIONS)?;
        } else {
            let mut index = 0;
            for group in &document.groups {
                backend.text(
                    column_x(index, width),
                    y,
                    TABLE_SIZE,
                    Weight::Bold,
                    &group.caption,
                )?;
                index += group.span;
            }
            y += ROW_HEIGHT;

            backend.text(MARGIN, y, TABLE_SIZE, Weight::Bold, &document.label_caption)?;
            for (index, caption) in document.columns.iter().enumerate() {
                backend.text(column_x(index, width), y, TABLE_SIZE, Weight::Bold, caption)?;
            }
            y += ROW_HEIGHT;

            for (label, cells) in document.rows.iter().skip(page * rows_per_page).take(rows_per_page) {
                backend.text(MARGIN, y, TABLE_SIZE, Weight::Regular, label)?;
                for (index, cell) in cells.iter().enumerate() {
                    backend.text(column_x(index, width), y, TABLE_SIZE, Weight::Regular, cell)?;
                }
                y += ROW_HEIGHT;
            }
        }

        let footer = format!("Page {} of {pages}", page + 1);
        backend.text(
            MARGIN,
            PAGE_HEIGHT_PT - MARGIN,
            HEADER_SIZE,
            Weight::Regular,
            &footer,
        )?;
    }

    debug!(pages, rows = document.rows.len(), "Document pages drawn");
    Ok((backend.finish()?, pages))
}
