//! db-anonymizer
//!
//! Rewrites personal data in a MySQL or PostgreSQL database according to a
//! YAML (or JSON) configuration: each configured column receives a fixed
//! value, NULL, a SQL expression, or freshly generated synthetic data.
//!
//! # Crates
//!
//! - `anonymizer_config` - configuration document and validation
//! - `anonymizer_faker` - synthetic value generators
//! - `anonymizer_core` - plan compiler, SQL generation and the chunked engine
//! - `anonymizer_report` - run report (JSON and console)
//!
//! # CLI Usage
//!
//! ```bash
//! # Preview what would change
//! anonymize-db --config anonymize.yaml --dry-run
//!
//! # Anonymize with 8 workers and write logs/report.json
//! anonymize-db --config anonymize.yaml --workers 8 --report json --log logs
//! ```

use anonymizer_config::Config;
use anonymizer_core::{compile, Cancelled, Database, Engine, EngineOptions, ExecutionOutcome};
use anonymizer_report::{render_text, write_json, Report, ReportGenerator};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

pub mod connect;
pub mod logging;
pub mod mysql;
pub mod postgresql;

/// File name of the JSON report inside the log directory.
pub const JSON_REPORT: &str = "report.json";

#[derive(Parser, Clone, Debug)]
#[command(name = "anonymize-db")]
#[command(about = "Anonymize personal data in MySQL and PostgreSQL databases")]
#[command(long_about = None)]
pub struct AnonymizeOpts {
    /// Path to the YAML or JSON configuration file
    #[arg(long, env = "ANONYMIZE_DB_CONFIG")]
    pub config: PathBuf,

    /// Dry run mode - count and generate statements but don't modify data
    #[arg(long)]
    pub dry_run: bool,

    /// Final report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Directory for log files and the JSON report
    #[arg(long = "log", default_value = "logs", env = "ANONYMIZE_DB_LOG_DIR")]
    pub log_dir: PathBuf,

    /// Maximum number of chunks processed in parallel
    #[arg(long, default_value_t = num_cpus::get(), value_parser = parse_workers)]
    pub workers: usize,

    /// Look up primary keys in the database schema when not configured
    #[arg(long)]
    pub discover_primary_keys: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Write <log>/report.json
    Json,
    /// Print a summary to stdout
    Text,
}

fn parse_workers(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl AnonymizeOpts {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            workers: self.workers,
            dry_run: self.dry_run,
            discover_primary_keys: self.discover_primary_keys,
            ..Default::default()
        }
    }
}

/// Run one anonymization from the command line options.
///
/// Only configuration, connection, compilation and report output errors are
/// returned. Failed tables and chunks show up in the report's error count.
pub async fn run(opts: AnonymizeOpts) -> anyhow::Result<()> {
    let log_files = logging::init(&opts.log_dir)?;
    let started = Instant::now();
    let reporter = ReportGenerator::new(opts.dry_run, log_files.error_log().display().to_string());

    info!(
        config = %opts.config.display(),
        dry_run = opts.dry_run,
        report = ?opts.report,
        log_dir = %opts.log_dir.display(),
        workers = opts.workers,
        "Starting anonymize-db"
    );

    let result = run_logged(&opts, &reporter).await;
    if let Err(e) = &result {
        error!("{e:#}");
    }
    let report = result?;

    info!(
        tables = report.summary.total_tables,
        fields = report.summary.total_fields,
        rows_scanned = report.summary.total_rows_scanned,
        rows_affected = report.summary.total_rows_affected,
        errors = report.errors.count,
        "Anonymization completed in {:?}",
        started.elapsed()
    );
    println!("Completed in {:?}", started.elapsed());
    Ok(())
}

async fn run_logged(opts: &AnonymizeOpts, reporter: &ReportGenerator) -> anyhow::Result<Report> {
    let config = Config::from_file(&opts.config)
        .with_context(|| format!("Failed to load configuration from {}", opts.config.display()))?;
    let plan = compile(&config).context("Failed to create anonymization plan")?;
    let db = connect::connect_to_database(&config.database).await?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, finishing chunks already in progress");
                cancel.cancel();
            }
        }
    });

    let engine = Engine::new(Arc::clone(&db), plan, opts.engine_options());
    let result = engine.execute(cancel).await;
    if let Err(e) = db.close().await {
        warn!("Failed to close database connections: {e}");
    }

    let (outcome, cancelled) = split_cancelled(result);
    let report = reporter.generate(&outcome);
    output_report(&report, opts.report, &opts.log_dir)?;

    if cancelled {
        anyhow::bail!("Anonymization cancelled before all tables were processed");
    }
    Ok(report)
}

/// Run a compiled configuration against an already connected database.
pub async fn anonymize(
    db: Arc<dyn Database>,
    config: &Config,
    options: EngineOptions,
    cancel: CancellationToken,
) -> anyhow::Result<Result<ExecutionOutcome, Cancelled>> {
    let plan = compile(config).context("Failed to create anonymization plan")?;
    Ok(Engine::new(db, plan, options).execute(cancel).await)
}

fn split_cancelled(result: Result<ExecutionOutcome, Cancelled>) -> (ExecutionOutcome, bool) {
    match result {
        Ok(outcome) => (outcome, false),
        Err(Cancelled { outcome }) => (outcome, true),
    }
}

/// Print the report or write it as JSON into `log_dir`.
pub fn output_report(report: &Report, format: ReportFormat, log_dir: &Path) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => {
            let path = log_dir.join(JSON_REPORT);
            write_json(report, &path).context("Failed to output JSON report")?;
            println!("JSON report written to {}", path.display());
        }
        ReportFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}
