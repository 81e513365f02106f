//! Drives an [`AnonymizationPlan`] against a [`Database`].
//!
//! Tables run one after another. Each table is counted first; small tables
//! get one whole-table `UPDATE`, larger ones are split into primary-key
//! windows that run on a bounded pool of tasks, one row at a time inside each
//! window.

mod chunk;
mod result;

pub use chunk::{partition_key_range, KeyWindow};
pub use result::{Cancelled, ExecutionOutcome, ExecutionResult, UnitFailure};

use crate::database::Database;
use crate::error::UnitError;
use crate::placeholder::Substitutor;
use crate::plan::{AnonymizationPlan, TablePlan};
use crate::sql;
use chunk::ChunkJob;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Primary key assumed when none is configured or discovered.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Tables with more matching rows than this are processed in chunks.
pub const DEFAULT_CHUNK_THRESHOLD: u64 = 1000;

/// Width of one chunk in primary-key values.
pub const DEFAULT_CHUNK_SIZE: i64 = 1000;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Maximum number of chunks in flight at once.
    pub workers: usize,
    /// Count and generate, but never execute mutations.
    pub dry_run: bool,
    pub chunk_size: i64,
    pub chunk_threshold: u64,
    /// Ask the database for a table's primary key when none is configured.
    pub discover_primary_keys: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            dry_run: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
            discover_primary_keys: false,
        }
    }
}

type UnitReport = Result<Vec<ExecutionResult>, UnitFailure>;

pub struct Engine {
    db: Arc<dyn Database>,
    plan: AnonymizationPlan,
    substitutor: Substitutor,
    options: EngineOptions,
}

impl Engine {
    pub fn new(db: Arc<dyn Database>, plan: AnonymizationPlan, options: EngineOptions) -> Self {
        Self {
            db,
            plan,
            substitutor: Substitutor::default(),
            options,
        }
    }

    /// Run every table in the plan.
    ///
    /// Per-table and per-chunk failures are logged and recorded in the
    /// outcome; they never abort the run. `cancel` is checked before each
    /// table. Once it fires no further tables start, chunks already
    /// dispatched run to completion, and the partial outcome is returned
    /// inside [`Cancelled`].
    pub async fn execute(self, cancel: CancellationToken) -> Result<ExecutionOutcome, Cancelled> {
        let Engine {
            db,
            plan,
            substitutor,
            options,
        } = self;

        let workers = options.workers.max(1);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runner = Runner {
            db,
            substitutor,
            permits: Arc::new(Semaphore::new(workers)),
            tx,
            options,
        };

        info!(
            tables = plan.tables.len(),
            workers,
            dry_run = runner.options.dry_run,
            "Starting anonymization"
        );

        let mut outcome = ExecutionOutcome::default();
        let mut cancelled = false;
        for table in plan.tables {
            if cancel.is_cancelled() {
                warn!(table = %table.name, "Cancellation requested, not starting table");
                cancelled = true;
                break;
            }
            runner.run_table(table, &mut outcome).await;
            while let Ok(unit) = rx.try_recv() {
                outcome.absorb(unit);
            }
        }

        // Every chunk task holds a sender clone; the channel closes once the
        // last one finishes.
        drop(runner);
        while let Some(unit) = rx.recv().await {
            outcome.absorb(unit);
        }

        info!(
            results = outcome.results.len(),
            failures = outcome.failures.len(),
            "Anonymization finished"
        );

        if cancelled {
            Err(Cancelled { outcome })
        } else {
            Ok(outcome)
        }
    }
}

struct Runner {
    db: Arc<dyn Database>,
    substitutor: Substitutor,
    permits: Arc<Semaphore>,
    tx: mpsc::UnboundedSender<UnitReport>,
    options: EngineOptions,
}

impl Runner {
    async fn run_table(&self, mut table: TablePlan, outcome: &mut ExecutionOutcome) {
        let primary_key = match self.resolve_primary_key(&table).await {
            Ok(pk) => pk,
            Err(e) => return self.skip_table(&table, e, outcome),
        };
        table.primary_key = Some(primary_key.clone());

        let count = match self.db.count(&sql::count_statement(&table)).await {
            Ok(count) => count,
            Err(e) => return self.skip_table(&table, UnitError::Count(e), outcome),
        };
        info!(table = %table.name, rows = count, "Counted matching rows");

        if count > self.options.chunk_threshold {
            self.dispatch_chunks(Arc::new(table), primary_key.into(), count, outcome)
                .await;
        } else {
            match self.process_table(&table, count).await {
                Ok(results) => outcome.results.extend(results),
                Err(e) => self.skip_table(&table, e, outcome),
            }
        }
    }

    async fn resolve_primary_key(&self, table: &TablePlan) -> Result<String, UnitError> {
        if let Some(pk) = &table.primary_key {
            return Ok(pk.clone());
        }

        if self.options.discover_primary_keys {
            let discovered = self
                .db
                .discover_primary_key(&table.name)
                .await
                .map_err(UnitError::PrimaryKey)?;
            if let Some(pk) = discovered {
                info!(table = %table.name, primary_key = %pk, "Discovered primary key");
                return Ok(pk);
            }
        }

        warn!(
            table = %table.name,
            "No primary key configured, assuming {DEFAULT_PRIMARY_KEY}"
        );
        Ok(DEFAULT_PRIMARY_KEY.to_string())
    }

    /// One statement for every matching row. Synthetic columns get a single
    /// value shared by the whole update.
    async fn process_table(
        &self,
        table: &TablePlan,
        count: u64,
    ) -> Result<Vec<ExecutionResult>, UnitError> {
        let statement = sql::table_statement(table)?;
        let statement = self.substitutor.substitute(&statement)?;

        let start = Instant::now();
        let rows_affected = if self.options.dry_run {
            info!(table = %table.name, "Dry run: {statement}");
            count
        } else {
            self.db
                .execute(&statement)
                .await
                .map_err(UnitError::Execution)?
        };
        let duration = start.elapsed();

        info!(
            table = %table.name,
            affected = rows_affected,
            "Updated table in {duration:?}"
        );

        Ok(table
            .columns
            .iter()
            .map(|column| ExecutionResult {
                table_name: table.name.clone(),
                field_name: column.name.clone(),
                rows_scanned: count,
                rows_affected,
                strategy: column.strategy.kind(),
                duration,
                error: None,
            })
            .collect())
    }

    async fn dispatch_chunks(
        &self,
        table: Arc<TablePlan>,
        primary_key: Arc<str>,
        count: u64,
        outcome: &mut ExecutionOutcome,
    ) {
        let range = self
            .db
            .key_range(&sql::range_statement(&table, &primary_key))
            .await;
        let (min, max) = match range {
            Ok(Some(bounds)) => bounds,
            // Counted rows but no key: NULL keys, or rows deleted since the count.
            Ok(None) => {
                return self.skip_table(&table, UnitError::EmptyKeyRange(count), outcome)
            }
            Err(e) => return self.skip_table(&table, UnitError::RangeProbe(e), outcome),
        };

        info!(
            table = %table.name,
            min,
            max,
            chunk_size = self.options.chunk_size,
            "Processing table in chunks"
        );

        for window in partition_key_range(min, max, self.options.chunk_size) {
            // Waits here while `workers` chunks are already running.
            let Ok(permit) = Arc::clone(&self.permits).acquire_owned().await else {
                break;
            };
            let job = ChunkJob {
                db: Arc::clone(&self.db),
                table: Arc::clone(&table),
                primary_key: Arc::clone(&primary_key),
                window,
                substitutor: self.substitutor,
                dry_run: self.options.dry_run,
            };
            let tx = self.tx.clone();
            tokio::spawn(async move {
                let report = job.run().await;
                drop(permit);
                // The receiver outlives every sender.
                let _ = tx.send(report);
            });
        }
    }

    fn skip_table(&self, table: &TablePlan, error: UnitError, outcome: &mut ExecutionOutcome) {
        error!(table = %table.name, "Skipping table: {error}");
        outcome.failures.push(UnitFailure {
            table: table.name.clone(),
            chunk_start: None,
            error,
        });
    }
}
