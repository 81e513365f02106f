//! Anonymization plan compiler and chunked execution engine.
//!
//! # Architecture
//!
//! ```text
//! Config (anonymizer-config)
//!        │  plan::compile
//!        ▼
//! AnonymizationPlan ── TablePlan ── ColumnPlan ── Strategy
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │            Engine            │
//! │  count → decide → mutate     │      sql::*            (statement text)
//! │  whole-table | chunked       │ ───▶ Substitutor       (synthetic values)
//! │  Semaphore(workers) + mpsc   │      dyn Database      (driver seam)
//! └──────────────┬───────────────┘
//!                ▼
//!         ExecutionOutcome { results, failures }
//! ```
//!
//! Synthetic columns are rendered as placeholder tokens when SQL is built and
//! replaced by freshly generated literals immediately before execution, one
//! token at a time, so no two placeholders ever share a generated value.
//! A [`Statement`] records where its tokens are; nothing else in the text is
//! ever substituted.

pub mod database;
pub mod engine;
pub mod error;
pub mod placeholder;
pub mod plan;
pub mod sql;
pub mod strategy;


pub use database::{Database, DatabaseError};
pub use engine::{
    Cancelled, Engine, EngineOptions, ExecutionOutcome, ExecutionResult, KeyWindow, UnitFailure,
};
pub use error::UnitError;
pub use placeholder::{Placeholder, Substitutor};
pub use plan::{compile, AnonymizationPlan, ColumnPlan, CompilationError, StrategyError, TablePlan};
pub use sql::{PendingValue, SqlError, Statement};
pub use strategy::{FixedValue, Strategy, StrategyKind, SYNTHETIC_TYPE_PREFIX};
