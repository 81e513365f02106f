//! Non-fatal errors raised while processing one unit of work.

use crate::database::DatabaseError;
use crate::sql::SqlError;
use anonymizer_faker::UnsupportedGeneratorError;

/// Why a table or chunk contributed no results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("failed to resolve primary key: {0}")]
    PrimaryKey(DatabaseError),

    #[error("failed to count rows: {0}")]
    Count(DatabaseError),

    #[error("failed to probe primary key range: {0}")]
    RangeProbe(DatabaseError),

    #[error("primary key range is empty although {0} rows matched")]
    EmptyKeyRange(u64),

    #[error("failed to fetch primary keys: {0}")]
    KeyFetch(DatabaseError),

    #[error("failed to generate statement: {0}")]
    Statement(#[from] SqlError),

    #[error("failed to generate synthetic value: {0}")]
    Generator(#[from] UnsupportedGeneratorError),

    #[error("failed to execute update: {0}")]
    Execution(DatabaseError),
}
