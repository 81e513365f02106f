//! Run reports for db-anonymizer.
//!
//! A [`ReportGenerator`] is created when a run starts and turns the engine's
//! [`ExecutionOutcome`](anonymizer_core::ExecutionOutcome) into a [`Report`]
//! once it ends. Reports render as pretty JSON or as a console summary.

mod generator;
mod render;
mod types;

pub use generator::ReportGenerator;
pub use render::{render_text, write_json, ReportError};
pub use types::{ErrorSummary, ExecutionInfo, ExecutionMode, FieldReport, Report, Summary, TableReport};
