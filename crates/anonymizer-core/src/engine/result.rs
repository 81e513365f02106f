//! What the engine hands back to its caller.

use crate::error::UnitError;
use crate::strategy::StrategyKind;
use std::time::Duration;

/// Outcome for one column of one unit of work (a whole table or a chunk).
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub table_name: String,
    pub field_name: String,
    pub rows_scanned: u64,
    pub rows_affected: u64,
    pub strategy: StrategyKind,
    pub duration: Duration,
    pub error: Option<String>,
}

/// A table or chunk that was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFailure {
    pub table: String,
    /// First key of the failed window, `None` for table-level failures.
    pub chunk_start: Option<i64>,
    pub error: UnitError,
}

/// Everything a run produced. Results are in completion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionOutcome {
    pub results: Vec<ExecutionResult>,
    pub failures: Vec<UnitFailure>,
}

impl ExecutionOutcome {
    pub(crate) fn absorb(&mut self, unit: Result<Vec<ExecutionResult>, UnitFailure>) {
        match unit {
            Ok(results) => self.results.extend(results),
            Err(failure) => self.failures.push(failure),
        }
    }

    /// Failed units plus results that carry an error.
    pub fn error_count(&self) -> usize {
        self.failures.len() + self.results.iter().filter(|r| r.error.is_some()).count()
    }
}

/// The run was cancelled between tables. Carries whatever completed,
/// including chunks that were already in flight.
#[derive(Debug, thiserror::Error)]
#[error("anonymization cancelled after {} results", .outcome.results.len())]
pub struct Cancelled {
    pub outcome: ExecutionOutcome,
}
