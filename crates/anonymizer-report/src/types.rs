//! Report document types.

use anonymizer_core::StrategyKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Whether the run mutated the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    Real,
    DryRun,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Real => f.write_str("real"),
            ExecutionMode::DryRun => f.write_str("dry-run"),
        }
    }
}

/// Final report of one anonymization run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub execution: ExecutionInfo,
    pub summary: Summary,
    pub tables: Vec<TableReport>,
    pub errors: ErrorSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionInfo {
    pub mode: ExecutionMode,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_tables: usize,
    pub total_fields: usize,
    pub total_rows_scanned: u64,
    pub total_rows_affected: u64,
}

/// Totals for one table. All fields of a table share one row set, so the
/// table totals are those of its busiest field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub name: String,
    pub rows_scanned: u64,
    pub rows_affected: u64,
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub name: String,
    pub strategy: StrategyKind,
    pub rows_affected: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub count: usize,
    pub log_file: String,
}
