//! Primary-key windows and the per-window unit of work.

use super::result::{ExecutionResult, UnitFailure};
use crate::database::Database;
use crate::error::UnitError;
use crate::placeholder::Substitutor;
use crate::plan::TablePlan;
use crate::sql;
use std::iter;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Inclusive key range `[start, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyWindow {
    pub start: i64,
    pub last: i64,
}

impl KeyWindow {
    pub fn contains(&self, key: i64) -> bool {
        (self.start..=self.last).contains(&key)
    }
}

/// Split `[min, max]` into consecutive windows of `size` key values.
///
/// Windows are by key value, not row count, so sparse key spaces yield
/// windows with few or no rows. The windows cover every key in the range
/// exactly once, `i64::MAX` included.
pub fn partition_key_range(min: i64, max: i64, size: i64) -> impl Iterator<Item = KeyWindow> {
    let span = size.max(1) - 1;
    let first = (min <= max).then(|| KeyWindow {
        start: min,
        last: min.saturating_add(span),
    });
    iter::successors(first, move |window| {
        let start = window.last.checked_add(1).filter(|next| *next <= max)?;
        Some(KeyWindow {
            start,
            last: start.saturating_add(span),
        })
    })
}

/// Everything a spawned chunk task owns.
pub(crate) struct ChunkJob {
    pub db: Arc<dyn Database>,
    pub table: Arc<TablePlan>,
    pub primary_key: Arc<str>,
    pub window: KeyWindow,
    pub substitutor: Substitutor,
    pub dry_run: bool,
}

impl ChunkJob {
    pub async fn run(self) -> Result<Vec<ExecutionResult>, UnitFailure> {
        let window = self.window;
        self.process().await.map_err(|e| {
            error!(
                table = %self.table.name,
                offset = window.start,
                "Failed to process chunk: {e}"
            );
            UnitFailure {
                table: self.table.name.clone(),
                chunk_start: Some(window.start),
                error: e,
            }
        })
    }

    async fn process(&self) -> Result<Vec<ExecutionResult>, UnitError> {
        let table = &self.table;
        let keys = self
            .db
            .keys_in_window(&sql::keys_in_window_statement(
                table,
                &self.primary_key,
                &self.window,
            ))
            .await
            .map_err(UnitError::KeyFetch)?;

        let start = Instant::now();
        let mut rows_affected = 0;
        // Rows run one after another so each statement gets its own values.
        for key in &keys {
            let statement = sql::single_row_statement(table, &self.primary_key, *key)?;
            let statement = self.substitutor.substitute(&statement)?;
            if self.dry_run {
                debug!(table = %table.name, key, "Dry run: {statement}");
                rows_affected += 1;
            } else {
                rows_affected += self
                    .db
                    .execute(&statement)
                    .await
                    .map_err(UnitError::Execution)?;
            }
        }
        let duration = start.elapsed();

        info!(
            table = %table.name,
            offset = self.window.start,
            rows = keys.len(),
            affected = rows_affected,
            "Processed chunk in {duration:?}"
        );

        Ok(table
            .columns
            .iter()
            .map(|column| ExecutionResult {
                table_name: table.name.clone(),
                field_name: column.name.clone(),
                rows_scanned: keys.len() as u64,
                rows_affected,
                strategy: column.strategy.kind(),
                duration,
                error: None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_range() {
        let windows: Vec<_> = partition_key_range(5000, 6500, 1000).collect();
        assert_eq!(
            windows,
            vec![
                KeyWindow {
                    start: 5000,
                    last: 5999
                },
                KeyWindow {
                    start: 6000,
                    last: 6999
                },
            ]
        );
    }

    #[test]
    fn test_partition_single_key() {
        let windows: Vec<_> = partition_key_range(42, 42, 1000).collect();
        assert_eq!(windows, vec![KeyWindow { start: 42, last: 1041 }]);
    }

    #[test]
    fn test_partition_exact_multiple() {
        let windows: Vec<_> = partition_key_range(1, 3000, 1000).collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2], KeyWindow { start: 2001, last: 3000 });
    }

    #[test]
    fn test_partition_windows_are_contiguous() {
        let windows: Vec<_> = partition_key_range(-2500, 2500, 700).collect();
        assert_eq!(windows.first().map(|w| w.start), Some(-2500));
        assert!(windows.last().unwrap().last >= 2500);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].last + 1, pair[1].start);
        }
    }

    #[test]
    fn test_partition_empty_range() {
        assert_eq!(partition_key_range(10, 9, 1000).count(), 0);
    }

    #[test]
    fn test_partition_covers_largest_key() {
        let windows: Vec<_> = partition_key_range(i64::MAX - 5, i64::MAX, 1000).collect();
        assert_eq!(
            windows,
            vec![KeyWindow {
                start: i64::MAX - 5,
                last: i64::MAX
            }]
        );
        for key in i64::MAX - 5..=i64::MAX {
            assert_eq!(windows.iter().filter(|w| w.contains(key)).count(), 1);
        }
    }

    #[test]
    fn test_partition_straddling_largest_key() {
        let windows: Vec<_> = partition_key_range(i64::MAX - 1500, i64::MAX, 1000).collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].last, i64::MAX);
        assert!(windows.iter().any(|w| w.contains(i64::MAX)));
        assert!(windows.iter().any(|w| w.contains(i64::MAX - 1500)));
    }

    #[test]
    fn test_partition_smallest_key() {
        let windows: Vec<_> = partition_key_range(i64::MIN, i64::MIN + 10, 4).collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].start, i64::MIN);
        assert_eq!(windows[2].last, i64::MIN + 11);
    }
}
