//! JSON and console output for a [`Report`].

use crate::types::Report;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Write the report as pretty-printed JSON.
pub fn write_json(report: &Report, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Human-readable report for the console.
pub fn render_text(report: &Report) -> String {
    let execution = &report.execution;
    let summary = &report.summary;

    let mut output = format!(
        "=== Anonymization Report ===\n\
         Mode: {}\n\
         Start Time: {}\n\
         End Time: {}\n\
         Duration: {} seconds\n\n",
        execution.mode,
        execution.start_time.to_rfc3339(),
        execution.end_time.to_rfc3339(),
        execution.duration_seconds
    );

    output.push_str(&format!(
        "=== Summary ===\n\
         Total Tables: {}\n\
         Total Fields: {}\n\
         Total Rows Scanned: {}\n\
         Total Rows Affected: {}\n\n",
        summary.total_tables,
        summary.total_fields,
        summary.total_rows_scanned,
        summary.total_rows_affected
    ));

    output.push_str("=== Tables ===\n");
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Table", "Field", "Strategy", "Rows Affected"]);
    for table_report in &report.tables {
        for (i, field) in table_report.fields.iter().enumerate() {
            let name = if i == 0 { table_report.name.as_str() } else { "" };
            table.add_row(vec![
                Cell::new(name),
                Cell::new(&field.name),
                Cell::new(field.strategy),
                Cell::new(field.rows_affected),
            ]);
        }
    }
    output.push_str(&table.to_string());
    output.push('\n');

    if report.errors.count > 0 {
        let count = Cell::new(report.errors.count).fg(Color::Red);
        let mut errors = Table::new();
        errors.load_preset(UTF8_FULL);
        errors.add_row(vec![Cell::new("Error Count"), count]);
        errors.add_row(vec![Cell::new("Error Log"), Cell::new(&report.errors.log_file)]);
        output.push_str("\n=== Errors ===\n");
        output.push_str(&errors.to_string());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportGenerator;
    use anonymizer_core::{ExecutionOutcome, ExecutionResult, StrategyKind};
    use std::time::Duration;
    use tempfile::TempDir;

    fn outcome() -> ExecutionOutcome {
        let result = |field: &str, strategy| ExecutionResult {
            table_name: "customer_entity".to_string(),
            field_name: field.to_string(),
            rows_scanned: 500,
            rows_affected: 500,
            strategy,
            duration: Duration::from_millis(12),
            error: None,
        };
        ExecutionOutcome {
            results: vec![
                result("email", StrategyKind::Synthetic),
                result("firstname", StrategyKind::Fixed),
                result("lastname", StrategyKind::Null),
            ],
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_write_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let report = ReportGenerator::new(true, "logs/errors.txt").generate(&outcome());

        write_json(&report, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["execution"]["mode"], "dry-run");
        assert_eq!(json["summary"]["total_tables"], 1);
        assert_eq!(json["summary"]["total_fields"], 3);
        assert_eq!(json["summary"]["total_rows_affected"], 500);
        assert_eq!(json["tables"][0]["name"], "customer_entity");
        assert_eq!(json["tables"][0]["fields"][0]["strategy"], "faker");
        assert_eq!(json["tables"][0]["fields"][1]["strategy"], "fixed");
        assert_eq!(json["errors"]["count"], 0);
        assert_eq!(json["errors"]["log_file"], "logs/errors.txt");
    }

    #[test]
    fn test_write_json_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let report = ReportGenerator::new(false, "errors.txt").generate(&outcome());

        let err = write_json(&report, &path).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[test]
    fn test_render_text() {
        let report = ReportGenerator::new(false, "errors.txt").generate(&outcome());
        let text = render_text(&report);

        assert!(text.starts_with("=== Anonymization Report ===\nMode: real\n"));
        assert!(text.contains("Total Rows Affected: 500"));
        assert!(text.contains("customer_entity"));
        assert!(text.contains("firstname"));
        assert!(text.contains("faker"));
        assert!(!text.contains("=== Errors ==="));
    }

    #[test]
    fn test_render_text_lists_errors() {
        let mut outcome = outcome();
        outcome.results[0].error = Some("Deadlock found".to_string());
        let report = ReportGenerator::new(false, "logs/errors.txt").generate(&outcome);

        let text = render_text(&report);
        assert!(text.contains("=== Errors ==="));
        assert!(text.contains("logs/errors.txt"));
    }
}
