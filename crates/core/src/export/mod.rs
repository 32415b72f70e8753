//! Document export.
//!
//! Serializes the bank-statement layout or the monthly detail grid into a
//! paginated document. Layout and pagination live here; drawing goes
//! through a [`DocumentBackend`], with [`PrintPdfBackend`] producing PDF.

pub mod backend;
pub mod error;
pub mod layout;
pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use coop_shared::AppConfig;
use coop_shared::config::ExportConfig;
use tracing::info;

pub use backend::{DocumentBackend, Weight};
pub use error::ExportError;
pub use layout::{ColumnGroup, NO_TRANSACTIONS, TableDocument};
pub use pdf::PrintPdfBackend;

use crate::classify::{Classifier, ClassifyError};
use crate::render;
use crate::render::statement::STATEMENT_GROUPS;
use crate::snapshot::MemberIdentity;
use crate::summary::MonthlyAggregation;

/// Which view a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// The fixed bank-statement layout.
    BankStatement,
    /// The monthly detail grid.
    MonthlySummary,
}

impl StatementKind {
    /// File-name prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankStatement => "bank_statement",
            Self::MonthlySummary => "monthly_summary",
        }
    }

    /// Title printed under the organization name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BankStatement => "Member Statement",
            Self::MonthlySummary => "Monthly Financial Summary",
        }
    }
}

/// A finished document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// `<kind>_<member>_<yyyyMMdd>.pdf`
    pub file_name: String,
    /// Document bytes.
    pub bytes: Vec<u8>,
    /// Number of pages drawn.
    pub pages: usize,
}

/// Only ASCII alphanumerics, dots, hyphens and underscores survive.
fn sanitize(identifier: &str) -> String {
    identifier
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the document file name.
///
/// Format: `{kind}_{member_no}_{yyyyMMdd}.pdf`; without a member number the
/// identifier is `cooperative`.
#[must_use]
pub fn file_name(kind: StatementKind, member: Option<&MemberIdentity>, date: NaiveDate) -> String {
    let identifier = member
        .and_then(|member| member.member_no.as_deref())
        .map(sanitize)
        .filter(|identifier| !identifier.is_empty())
        .unwrap_or_else(|| "cooperative".to_string());

    format!("{}_{identifier}_{}.pdf", kind.as_str(), date.format("%Y%m%d"))
}

/// Exports aggregations as paginated documents.
#[derive(Debug, Clone)]
pub struct StatementExporter {
    config: ExportConfig,
    currency: String,
    classifier: Classifier,
}

impl StatementExporter {
    /// Creates an exporter; `classifier` supplies the bank-statement
    /// predicates.
    #[must_use]
    pub fn new(config: ExportConfig, currency: impl Into<String>, classifier: Classifier) -> Self {
        Self {
            config,
            currency: currency.into(),
            classifier,
        }
    }

    /// Creates an exporter from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured classification rule is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClassifyError> {
        Ok(Self::new(
            config.export.clone(),
            config.statement.currency.clone(),
            Classifier::from_rules(&config.statement.classification)?,
        ))
    }

    /// The configured output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.config.output_dir)
    }

    fn header(
        &self,
        kind: StatementKind,
        year: Option<i32>,
        member: Option<&MemberIdentity>,
        date: NaiveDate,
    ) -> (String, Vec<String>) {
        let mut lines = vec![match year {
            Some(year) => format!("{} {year}", kind.title()),
            None => kind.title().to_string(),
        }];

        if let Some(member) = member {
            let name = member
                .full_name()
                .unwrap_or_else(|| render::format::MISSING.to_string());
            let number = render::format::optional_label(member.member_no.as_deref());
            lines.push(format!("Member: {name} ({number})"));
        }
        lines.push(format!("Report date: {}", date.format("%Y-%m-%d")));
        lines.push(format!("Currency: {}", self.currency));

        (self.config.organization_name.clone(), lines)
    }

    /// Lays out the bank-statement view.
    #[must_use]
    pub fn bank_statement_document(
        &self,
        aggregation: &MonthlyAggregation,
        member: Option<&MemberIdentity>,
        date: NaiveDate,
    ) -> TableDocument {
        let (title, header_lines) =
            self.header(StatementKind::BankStatement, aggregation.year, member, date);

        let rows = render::bank_statement(aggregation, &self.classifier)
            .ready()
            .map(|statement| {
                statement
                    .lines
                    .iter()
                    .map(|line| (line.label.clone(), line.cells()))
                    .collect()
            })
            .unwrap_or_default();

        TableDocument {
            title,
            header_lines,
            label_caption: "Month".to_string(),
            groups: STATEMENT_GROUPS
                .iter()
                .map(|(caption, columns)| ColumnGroup {
                    caption: (*caption).to_string(),
                    span: columns.len(),
                })
                .collect(),
            columns: STATEMENT_GROUPS
                .iter()
                .flat_map(|(_, columns)| columns.iter().map(ToString::to_string))
                .collect(),
            rows,
        }
    }

    /// Lays out the monthly detail grid.
    #[must_use]
    pub fn detail_document(
        &self,
        aggregation: &MonthlyAggregation,
        member: Option<&MemberIdentity>,
        date: NaiveDate,
    ) -> TableDocument {
        let (title, header_lines) =
            self.header(StatementKind::MonthlySummary, aggregation.year, member, date);

        let Some(grid) = render::detail_grid(aggregation).ready() else {
            return TableDocument {
                title,
                header_lines,
                label_caption: "Month".to_string(),
                ..TableDocument::default()
            };
        };

        TableDocument {
            title,
            header_lines,
            label_caption: "Month".to_string(),
            groups: grid
                .header
                .iter()
                .map(|group| ColumnGroup {
                    caption: group.label.clone(),
                    span: group.columns.len(),
                })
                .collect(),
            columns: grid
                .header
                .iter()
                .flat_map(|group| group.columns.iter().cloned())
                .collect(),
            rows: grid
                .rows
                .into_iter()
                .map(|row| (row.month, row.cells))
                .collect(),
        }
    }

    /// Draws one view through `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or the backend fails.
    pub fn export<B: DocumentBackend>(
        &self,
        kind: StatementKind,
        aggregation: &MonthlyAggregation,
        member: Option<&MemberIdentity>,
        date: NaiveDate,
        backend: B,
    ) -> Result<ExportedDocument, ExportError> {
        let document = match kind {
            StatementKind::BankStatement => self.bank_statement_document(aggregation, member, date),
            StatementKind::MonthlySummary => self.detail_document(aggregation, member, date),
        };
        let (bytes, pages) = layout::draw(&document, self.config.rows_per_page, backend)?;
        let file_name = file_name(kind, member, date);

        info!(file = %file_name, pages, bytes = bytes.len(), "Statement exported");
        Ok(ExportedDocument {
            file_name,
            bytes,
            pages,
        })
    }

    /// Draws one view as PDF.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or PDF generation fails.
    pub fn export_pdf(
        &self,
        kind: StatementKind,
        aggregation: &MonthlyAggregation,
        member: Option<&MemberIdentity>,
        date: NaiveDate,
    ) -> Result<ExportedDocument, ExportError> {
        let backend = PrintPdfBackend::new(kind.title())?;
        self.export(kind, aggregation, member, date, backend)
    }

    /// Writes a document into the configured output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        save_to(self.output_dir(), document)
    }
}

/// Writes a document into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to(dir: &Path, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&document.file_name);
    fs::write(&path, &document.bytes)?;
    info!(path = %path.display(), "Statement saved");
    Ok(path)
}
