//! Coop statement CLI
//!
//! Renders statement views of a snapshot file as JSON, or exports the
//! bank statement or monthly summary as PDF.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coop_core::export::{self, ExportError, StatementExporter, StatementKind};
use coop_core::render::AccordionState;
use coop_core::snapshot::StatementSnapshot;
use coop_core::{MonthlyAggregation, StatementEngine};
use coop_shared::AppConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot JSON file.
    #[arg(short, long, value_name = "FILE")]
    snapshot: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one view as JSON.
    Render {
        #[arg(value_enum)]
        view: View,
        /// Month labels whose accordion panels start expanded.
        #[arg(long, value_name = "MONTH")]
        expand: Vec<String>,
    },
    /// Write a PDF document.
    Export {
        #[arg(value_enum, default_value_t = ExportKind::BankStatement)]
        kind: ExportKind,
        /// Report date printed in the header and file name (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Overrides the configured output directory.
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Export attempts before giving up.
        #[arg(long, default_value_t = 1)]
        attempts: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Aggregation,
    Detail,
    Condensed,
    Accordion,
    Statement,
    Yearly,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportKind {
    BankStatement,
    MonthlySummary,
}

impl From<ExportKind> for StatementKind {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::BankStatement => Self::BankStatement,
            ExportKind::MonthlySummary => Self::MonthlySummary,
        }
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<StatementSnapshot> {
    let file = File::open(path)
        .with_context(|| format!("Could not open snapshot file {}", path.display()))?;
    let snapshot = StatementSnapshot::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse snapshot file {}", path.display()))?;
    info!(
        months = snapshot.monthly_summary.len(),
        year = ?snapshot.year,
        "Snapshot loaded"
    );
    Ok(snapshot)
}

fn render(
    engine: &StatementEngine,
    snapshot: &StatementSnapshot,
    view: View,
    expand: Vec<String>,
) -> anyhow::Result<String> {
    let json = match view {
        View::Aggregation => serde_json::to_string_pretty(engine.aggregate(snapshot).as_ref())?,
        View::Detail => serde_json::to_string_pretty(&engine.detail_grid(snapshot))?,
        View::Condensed => serde_json::to_string_pretty(&engine.condensed_grid(snapshot))?,
        View::Accordion => {
            let mut state = AccordionState::new();
            for month in expand {
                state.toggle(&month);
            }
            serde_json::to_string_pretty(&engine.accordion(snapshot, &state))?
        }
        View::Statement => serde_json::to_string_pretty(&engine.bank_statement(snapshot))?,
        View::Yearly => serde_json::to_string_pretty(&engine.yearly_rollup(snapshot))?,
    };
    Ok(json)
}

/// Retries only the export step; the aggregation is reused as is.
fn export_with_retry(
    exporter: &StatementExporter,
    kind: StatementKind,
    aggregation: &MonthlyAggregation,
    snapshot: &StatementSnapshot,
    date: NaiveDate,
    output_dir: Option<&Path>,
    attempts: u8,
) -> Result<PathBuf, ExportError> {
    let mut attempt = 1;
    loop {
        let result = exporter
            .export_pdf(kind, aggregation, snapshot.member.as_ref(), date)
            .and_then(|document| match output_dir {
                Some(dir) => export::save_to(dir, &document),
                None => exporter.save(&document),
            });

        match result {
            Ok(path) => return Ok(path),
            Err(err) if attempt < attempts => {
                warn!(attempt, error = %err, "Export failed, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let engine = StatementEngine::from_config(&config)?;
    let snapshot = load_snapshot(&cli.snapshot)?;

    match cli.command {
        Command::Render { view, expand } => {
            println!("{}", render(&engine, &snapshot, view, expand)?);
        }
        Command::Export {
            kind,
            date,
            output_dir,
            attempts,
        } => {
            let aggregation = engine.aggregate(&snapshot);
            let exporter = StatementExporter::from_config(&config)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let path = export_with_retry(
                &exporter,
                kind.into(),
                &aggregation,
                &snapshot,
                date,
                output_dir.as_deref(),
                attempts.max(1),
            )?;
            info!(path = %path.display(), "Document written");
            println!("{}", path.display());
        }
    }

    Ok(())
}
