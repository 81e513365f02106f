//! SQL statement text for a [`TablePlan`].
//!
//! Identifiers, predicates, orderings and expressions come from trusted
//! configuration and are emitted verbatim. Only text literals produced by
//! this crate are escaped.

use crate::engine::KeyWindow;
use crate::placeholder::Placeholder;
use crate::plan::TablePlan;
use crate::strategy::Strategy;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    #[error("table {0} has no columns to update")]
    NoColumns(String),
}

/// A synthetic value still to be generated, and where its token sits in
/// the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValue {
    pub span: Range<usize>,
    pub placeholder: Placeholder,
}

/// Generated `UPDATE` text plus every placeholder written into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    text: String,
    pending: Vec<PendingValue>,
}

impl Statement {
    /// Statement text with placeholder tokens still in place.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholders in the order they appear in the text.
    pub fn pending(&self) -> &[PendingValue] {
        &self.pending
    }

    fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    fn push_placeholder(&mut self, placeholder: Placeholder) {
        let start = self.text.len();
        self.text.push_str(&placeholder.to_string());
        self.pending.push(PendingValue {
            span: start..self.text.len(),
            placeholder,
        });
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Single-quote a text literal, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One `UPDATE` touching every row matching the table's filter, honoring
/// its ordering and limit.
pub fn table_statement(table: &TablePlan) -> Result<Statement, SqlError> {
    let mut statement = Statement::default();
    statement.push_str(&format!("UPDATE {} SET ", table.name));
    push_assignments(&mut statement, table, None)?;
    if let Some(predicate) = &table.where_clause {
        statement.push_str(&format!(" WHERE {predicate}"));
    }
    if let Some(order_by) = &table.order_by {
        statement.push_str(&format!(" ORDER BY {order_by}"));
    }
    if table.limit > 0 {
        statement.push_str(&format!(" LIMIT {}", table.limit));
    }
    Ok(statement)
}

/// `SELECT COUNT(*)` over the rows the table's filter selects.
pub fn count_statement(table: &TablePlan) -> String {
    match &table.where_clause {
        Some(predicate) => format!("SELECT COUNT(*) FROM {} WHERE {}", table.name, predicate),
        None => format!("SELECT COUNT(*) FROM {}", table.name),
    }
}

/// `SELECT MIN(pk), MAX(pk)` over the rows the table's filter selects.
pub fn range_statement(table: &TablePlan, primary_key: &str) -> String {
    let mut sql = format!(
        "SELECT MIN({pk}), MAX({pk}) FROM {}",
        table.name,
        pk = primary_key
    );
    if let Some(predicate) = &table.where_clause {
        sql.push_str(" WHERE ");
        sql.push_str(predicate);
    }
    sql
}

/// Keys of matching rows inside an inclusive window, ascending.
pub fn keys_in_window_statement(table: &TablePlan, primary_key: &str, window: &KeyWindow) -> String {
    let mut sql = format!(
        "SELECT {pk} FROM {} WHERE {pk} BETWEEN {} AND {}",
        table.name,
        window.start,
        window.last,
        pk = primary_key
    );
    if let Some(predicate) = &table.where_clause {
        sql.push_str(&format!(" AND ({predicate})"));
    }
    sql.push_str(&format!(" ORDER BY {primary_key}"));
    sql
}

/// `UPDATE` for exactly one row. Synthetic placeholders carry the row key.
pub fn single_row_statement(
    table: &TablePlan,
    primary_key: &str,
    key: i64,
) -> Result<Statement, SqlError> {
    let mut statement = Statement::default();
    statement.push_str(&format!("UPDATE {} SET ", table.name));
    push_assignments(&mut statement, table, Some(key))?;
    statement.push_str(&format!(" WHERE {primary_key} = {key}"));
    if let Some(predicate) = &table.where_clause {
        statement.push_str(&format!(" AND ({predicate})"));
    }
    Ok(statement)
}

fn push_assignments(
    statement: &mut Statement,
    table: &TablePlan,
    row: Option<i64>,
) -> Result<(), SqlError> {
    if table.columns.is_empty() {
        return Err(SqlError::NoColumns(table.name.clone()));
    }

    for (i, column) in table.columns.iter().enumerate() {
        if i > 0 {
            statement.push_str(", ");
        }
        statement.push_str(&format!("{} = ", column.name));
        match (&column.strategy, row) {
            // Single-row statements key each synthetic placeholder by row.
            (Strategy::Synthetic(kind), Some(key)) => statement.push_placeholder(
                Placeholder::new(kind, &table.name, &column.name, Some(key)),
            ),
            (Strategy::Synthetic(kind), None) => {
                statement.push_placeholder(Placeholder::new(kind, &table.name, &column.name, None))
            }
            (strategy, _) => statement.push_str(&strategy.render(&table.name, &column.name)),
        }
    }
    Ok(())
}
