//! Aggregation of engine results into a [`Report`].

use crate::types::{
    ErrorSummary, ExecutionInfo, ExecutionMode, FieldReport, Report, Summary, TableReport,
};
use anonymizer_core::{ExecutionOutcome, StrategyKind};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Builds the report for one run. Create it when the run starts.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    start_time: DateTime<Utc>,
    dry_run: bool,
    error_log: String,
}

struct FieldTotals {
    strategy: StrategyKind,
    rows_scanned: u64,
    rows_affected: u64,
}

impl ReportGenerator {
    pub fn new(dry_run: bool, error_log: impl Into<String>) -> Self {
        Self {
            start_time: Utc::now(),
            dry_run,
            error_log: error_log.into(),
        }
    }

    /// Summarize an outcome. Results from separate chunks of the same table
    /// and field are summed; tables and fields come out sorted by name.
    pub fn generate(&self, outcome: &ExecutionOutcome) -> Report {
        let end_time = Utc::now();
        let duration_seconds = (end_time - self.start_time).num_seconds().max(0) as u64;

        let mut totals: BTreeMap<&str, BTreeMap<&str, FieldTotals>> = BTreeMap::new();
        for result in outcome.results.iter().filter(|r| r.error.is_none()) {
            let field = totals
                .entry(result.table_name.as_str())
                .or_default()
                .entry(result.field_name.as_str())
                .or_insert(FieldTotals {
                    strategy: result.strategy,
                    rows_scanned: 0,
                    rows_affected: 0,
                });
            field.rows_scanned += result.rows_scanned;
            field.rows_affected += result.rows_affected;
        }

        let tables: Vec<TableReport> = totals
            .into_iter()
            .map(|(name, fields)| {
                let rows_scanned = fields.values().map(|f| f.rows_scanned).max().unwrap_or(0);
                let rows_affected = fields.values().map(|f| f.rows_affected).max().unwrap_or(0);
                let fields = fields
                    .into_iter()
                    .map(|(name, totals)| FieldReport {
                        name: name.to_string(),
                        strategy: totals.strategy,
                        rows_affected: totals.rows_affected,
                    })
                    .collect();
                TableReport {
                    name: name.to_string(),
                    rows_scanned,
                    rows_affected,
                    fields,
                }
            })
            .collect();

        let summary = Summary {
            total_tables: tables.len(),
            total_fields: tables.iter().map(|t| t.fields.len()).sum(),
            total_rows_scanned: tables.iter().map(|t| t.rows_scanned).sum(),
            total_rows_affected: tables.iter().map(|t| t.rows_affected).sum(),
        };

        Report {
            execution: ExecutionInfo {
                mode: if self.dry_run {
                    ExecutionMode::DryRun
                } else {
                    ExecutionMode::Real
                },
                start_time: self.start_time,
                end_time,
                duration_seconds,
            },
            summary,
            tables,
            errors: ErrorSummary {
                count: outcome.error_count(),
                log_file: self.error_log.clone(),
            },
        }
    }
}
