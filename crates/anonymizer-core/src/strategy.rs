//! Column anonymization strategies and their SQL rendering.

use crate::placeholder::Placeholder;
use crate::sql::quote_literal;
use serde::Serialize;
use std::fmt;

/// Prefix marking a synthetic generator in a column's `type` field.
pub const SYNTHETIC_TYPE_PREFIX: &str = "faker.";

/// Literal assigned by the [`Strategy::Fixed`] strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum FixedValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FixedValue {
    /// SQL literal for this value. Text is single-quoted with embedded
    /// quotes doubled; numbers use their canonical textual form.
    pub fn to_sql(&self) -> String {
        match self {
            FixedValue::Null => "NULL".to_string(),
            FixedValue::Bool(true) => "TRUE".to_string(),
            FixedValue::Bool(false) => "FALSE".to_string(),
            FixedValue::Number(n) => n.to_string(),
            FixedValue::Text(s) => quote_literal(s),
        }
    }
}

/// How one column is rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Assign a constant literal.
    Fixed(FixedValue),
    /// Assign SQL NULL.
    Null,
    /// Assign the result of a trusted SQL expression, inserted verbatim.
    Expression(String),
    /// Assign a value from the named synthetic generator, distinct per row.
    Synthetic(String),
}

/// Report tag for a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StrategyKind {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "expr")]
    Expression,
    #[serde(rename = "faker")]
    Synthetic,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Fixed => "fixed",
            StrategyKind::Null => "null",
            StrategyKind::Expression => "expr",
            StrategyKind::Synthetic => "faker",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Fixed(_) => StrategyKind::Fixed,
            Strategy::Null => StrategyKind::Null,
            Strategy::Expression(_) => StrategyKind::Expression,
            Strategy::Synthetic(_) => StrategyKind::Synthetic,
        }
    }

    /// Right-hand side of `column = ...` in a statement that may touch many
    /// rows. Synthetic columns render a placeholder without a row key.
    pub fn render(&self, table: &str, column: &str) -> String {
        match self {
            Strategy::Fixed(value) => value.to_sql(),
            Strategy::Null => "NULL".to_string(),
            Strategy::Expression(expr) => expr.clone(),
            Strategy::Synthetic(kind) => Placeholder::new(kind, table, column, None).to_string(),
        }
    }
}
