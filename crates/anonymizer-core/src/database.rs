//! Database seam used by the engine.

use async_trait::async_trait;
use std::fmt::Display;

/// Failure reported by a [`Database`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DatabaseError(pub String);

impl DatabaseError {
    /// Wrap a driver error, keeping its message.
    pub fn driver<E: Display>(err: E) -> Self {
        Self(err.to_string())
    }
}

/// Operations the engine needs from a live connection.
///
/// Implementations wrap a connection pool and are shared between concurrent
/// chunk tasks; they must hand out connections to concurrent callers on
/// their own.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run a `SELECT COUNT(*)` and return the count.
    async fn count(&self, sql: &str) -> Result<u64, DatabaseError>;

    /// Run a `SELECT MIN(pk), MAX(pk)`. `None` when either bound is NULL,
    /// i.e. no rows matched.
    async fn key_range(&self, sql: &str) -> Result<Option<(i64, i64)>, DatabaseError>;

    /// Run a single-column key query and return the keys in result order.
    async fn keys_in_window(&self, sql: &str) -> Result<Vec<i64>, DatabaseError>;

    /// Execute a mutation and return the number of affected rows.
    async fn execute(&self, sql: &str) -> Result<u64, DatabaseError>;

    /// Look up the primary key column of `table` in catalog metadata.
    /// Composite keys report their first column.
    async fn discover_primary_key(&self, table: &str) -> Result<Option<String>, DatabaseError>;

    /// Release pooled connections.
    async fn close(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
