//! Synthetic value placeholders embedded in generated SQL.
//!
//! A placeholder looks like `'[SYN:<type>:<table>:<column>[:<row key>]]'`.
//! It is a valid SQL string literal on its own, so a statement that escapes
//! substitution fails loudly at the database rather than silently writing
//! one shared value.
//!
//! The SQL generator records where it wrote each placeholder (see
//! [`Statement`]); only those spans are substituted. Text that merely looks
//! like a placeholder, such as a fixed value or a `where` predicate, passes
//! through unchanged.

use crate::sql::{quote_literal, Statement};
use anonymizer_faker::{Generator, UnsupportedGeneratorError};
use std::fmt;

const OPEN: &str = "'[SYN:";
const CLOSE: &str = "]'";

/// A pending synthetic value for one column, optionally for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: String,
    pub table: String,
    pub column: String,
    pub row: Option<i64>,
}

impl Placeholder {
    pub fn new(kind: &str, table: &str, column: &str, row: Option<i64>) -> Self {
        Self {
            kind: kind.to_string(),
            table: table.to_string(),
            column: column.to_string(),
            row,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN}{}:{}:{}", self.kind, self.table, self.column)?;
        if let Some(row) = self.row {
            write!(f, ":{row}")?;
        }
        f.write_str(CLOSE)
    }
}

/// Replaces placeholders with freshly generated, quoted literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitutor {
    generator: Generator,
}

impl Substitutor {
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    /// Substitute every placeholder the statement recorded, in order.
    ///
    /// Each occurrence gets its own generated value even when two tokens are
    /// textually identical. Generated values are never rescanned.
    pub fn substitute(&self, statement: &Statement) -> Result<String, UnsupportedGeneratorError> {
        let text = statement.text();
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;

        for pending in statement.pending() {
            let value = self.generator.generate(&pending.placeholder.kind)?;
            out.push_str(&text[copied..pending.span.start]);
            out.push_str(&quote_literal(&value));
            copied = pending.span.end;
        }

        out.push_str(&text[copied..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ColumnPlan, TablePlan};
    use crate::sql::{single_row_statement, table_statement};
    use crate::strategy::{FixedValue, Strategy};
    use std::collections::HashSet;

    fn literals(sql: &str) -> Vec<String> {
        sql.split('\'')
            .enumerate()
            .filter(|(i, _)| i % 2 == 1)
            .map(|(_, s)| s.to_string())
            .collect()
    }

    fn column(name: &str, strategy: Strategy) -> ColumnPlan {
        ColumnPlan {
            name: name.to_string(),
            strategy,
            formatter: None,
        }
    }

    fn users(columns: Vec<ColumnPlan>) -> TablePlan {
        TablePlan {
            name: "users".to_string(),
            primary_key: Some("id".to_string()),
            where_clause: None,
            limit: 0,
            order_by: None,
            columns,
        }
    }

    fn fixed_text(value: &str) -> Strategy {
        Strategy::Fixed(FixedValue::Text(value.to_string()))
    }

    #[test]
    fn test_display() {
        let mut placeholder = Placeholder::new("email", "users", "email", None);
        assert_eq!(placeholder.to_string(), "'[SYN:email:users:email]'");
        placeholder.row = Some(12);
        assert_eq!(placeholder.to_string(), "'[SYN:email:users:email:12]'");
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let statement = table_statement(&users(vec![column("phone", Strategy::Null)])).unwrap();
        assert!(statement.pending().is_empty());
        assert_eq!(
            Substitutor::default().substitute(&statement).unwrap(),
            "UPDATE users SET phone = NULL"
        );
    }

    #[test]
    fn test_substitutes_with_quoted_literal() {
        let table = users(vec![column("email", Strategy::Synthetic("email".to_string()))]);
        let statement = single_row_statement(&table, "id", 1).unwrap();
        let out = Substitutor::default().substitute(&statement).unwrap();
        assert!(!out.contains("[SYN:"));
        assert!(out.starts_with("UPDATE users SET email = '"));
        assert!(out.ends_with("' WHERE id = 1"));
        assert!(literals(&out)[0].contains('@'));
    }

    #[test]
    fn test_identical_tokens_get_independent_values() {
        let columns = (0..20)
            .map(|_| column("token", Strategy::Synthetic("uuid".to_string())))
            .collect();
        let statement = table_statement(&users(columns)).unwrap();
        let tokens: HashSet<_> = literals(statement.text()).into_iter().collect();
        assert_eq!(tokens.len(), 1);

        let out = Substitutor::default().substitute(&statement).unwrap();
        let values: HashSet<_> = literals(&out).into_iter().collect();
        assert_eq!(values.len(), 20);
    }

    #[test]
    fn test_placeholder_shaped_user_text_is_kept() {
        let mut table = users(vec![
            column("email", Strategy::Synthetic("email".to_string())),
            column("note", fixed_text("[SYN:email:x:y]")),
            column("tag", fixed_text("[SYN:oops")),
            column("memo", Strategy::Expression("'[SYN:city:a:b]'".to_string())),
        ]);
        table.where_clause = Some("comment <> '[SYN:name:c:d]'".to_string());

        let statement = single_row_statement(&table, "id", 9).unwrap();
        assert_eq!(statement.pending().len(), 1);
        let out = Substitutor::default().substitute(&statement).unwrap();

        assert!(out.contains(", note = '[SYN:email:x:y]', "));
        assert!(out.contains(", tag = '[SYN:oops', "));
        assert!(out.contains(", memo = '[SYN:city:a:b]' WHERE id = 9"));
        assert!(out.ends_with(" AND (comment <> '[SYN:name:c:d]')"));
        assert!(!out.contains("'[SYN:email:users:email:9]'"));
        assert!(literals(&out)[0].contains('@'));
    }

    #[test]
    fn test_unknown_generator() {
        let table = users(vec![column("size", Strategy::Synthetic("shoe_size".to_string()))]);
        let statement = table_statement(&table).unwrap();
        let err = Substitutor::default().substitute(&statement).unwrap_err();
        assert_eq!(err, UnsupportedGeneratorError("shoe_size".to_string()));
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let mut table = users(vec![
            column("a", Strategy::Synthetic("city".to_string())),
            column("b", fixed_text("it's")),
            column("c", Strategy::Synthetic("city".to_string())),
        ]);
        table.where_clause = Some("x = 1".to_string());
        let out = Substitutor::default()
            .substitute(&table_statement(&table).unwrap())
            .unwrap();
        assert!(out.contains(", b = 'it''s', c = '"));
        assert!(out.ends_with("' WHERE x = 1"));
    }
}
