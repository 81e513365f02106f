//! Compiles a validated [`Config`] into an executable plan.
//!
//! Strategy selection for a column, highest priority first:
//!
//! 1. `null: true` → [`Strategy::Null`]
//! 2. non-empty `expr` → [`Strategy::Expression`]
//! 3. `value` present → [`Strategy::Fixed`]
//! 4. `type` beginning with `faker.` → [`Strategy::Synthetic`]
//!
//! Anything else fails compilation for the whole plan.

use crate::strategy::{FixedValue, Strategy, SYNTHETIC_TYPE_PREFIX};
use anonymizer_config::{ColumnConfig, Config, TableConfig};

/// One column assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    pub name: String,
    pub strategy: Strategy,
    /// Carried from configuration; statements do not use it.
    pub formatter: Option<String>,
}

/// Everything needed to rewrite one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlan {
    pub name: String,
    /// Configured primary key. The engine fills this in once, before any
    /// statement for the table is built, when it is absent.
    pub primary_key: Option<String>,
    pub where_clause: Option<String>,
    /// Zero means unlimited.
    pub limit: u64,
    pub order_by: Option<String>,
    /// Sorted by column name.
    pub columns: Vec<ColumnPlan>,
}

/// Tables in ascending name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnonymizationPlan {
    pub tables: Vec<TablePlan>,
}

/// Why a column configuration could not be turned into a strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("unsupported anonymization strategy: {0:?}")]
    Unsupported(String),

    #[error("fixed value must be a scalar, got {0}")]
    NonScalarValue(&'static str),

    #[error("synthetic generator name is empty")]
    EmptyGenerator,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompilationError {
    #[error("table name must not be empty")]
    EmptyTableName,

    #[error("error creating strategy for {table}.{column}: {source}")]
    Column {
        table: String,
        column: String,
        source: StrategyError,
    },
}

/// Build a plan from configuration. Fails on the first column whose
/// strategy cannot be determined.
pub fn compile(config: &Config) -> Result<AnonymizationPlan, CompilationError> {
    let tables = config
        .tables
        .iter()
        .map(|(name, table)| compile_table(name, table))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AnonymizationPlan { tables })
}

fn compile_table(name: &str, table: &TableConfig) -> Result<TablePlan, CompilationError> {
    if name.is_empty() {
        return Err(CompilationError::EmptyTableName);
    }

    let mut columns = Vec::with_capacity(table.columns.len());
    for (column, column_config) in &table.columns {
        let strategy =
            compile_strategy(column_config).map_err(|source| CompilationError::Column {
                table: name.to_string(),
                column: column.clone(),
                source,
            })?;
        columns.push(ColumnPlan {
            name: column.clone(),
            strategy,
            formatter: non_empty(&column_config.formatter),
        });
    }

    Ok(TablePlan {
        name: name.to_string(),
        primary_key: non_empty(&table.primary_key),
        where_clause: non_empty(&table.where_clause),
        limit: table.limit,
        order_by: non_empty(&table.order_by),
        columns,
    })
}

/// Pick the strategy for a single column.
pub fn compile_strategy(column: &ColumnConfig) -> Result<Strategy, StrategyError> {
    if column.null {
        return Ok(Strategy::Null);
    }

    if let Some(expr) = column.expr.as_deref().filter(|e| !e.is_empty()) {
        return Ok(Strategy::Expression(expr.to_string()));
    }

    if let Some(value) = &column.value {
        return fixed_value(value).map(Strategy::Fixed);
    }

    let kind = column.kind.as_deref().unwrap_or_default();
    match kind.strip_prefix(SYNTHETIC_TYPE_PREFIX) {
        Some("") => Err(StrategyError::EmptyGenerator),
        Some(generator) => Ok(Strategy::Synthetic(generator.to_string())),
        None => Err(StrategyError::Unsupported(kind.to_string())),
    }
}

fn fixed_value(value: &serde_json::Value) -> Result<FixedValue, StrategyError> {
    use serde_json::Value;

    match value {
        Value::Null => Ok(FixedValue::Null),
        Value::Bool(b) => Ok(FixedValue::Bool(*b)),
        Value::Number(n) => Ok(FixedValue::Number(n.clone())),
        Value::String(s) => Ok(FixedValue::Text(s.clone())),
        Value::Array(_) => Err(StrategyError::NonScalarValue("array")),
        Value::Object(_) => Err(StrategyError::NonScalarValue("object")),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> Config {
        Config::from_yaml(yaml).unwrap()
    }

    const CUSTOMERS: &str = r#"
database:
  host: localhost
  user: root
  name: shop
tables:
  customer_entity:
    where: "email NOT LIKE '%@company.com'"
    primary_key: entity_id
    columns:
      email:
        type: faker.email
        formatter: lower
      firstname:
        value: "Jane"
        formatter: "  "
      middlename:
        "null": true
      lastname:
        expr: "CONCAT('Customer', entity_id)"
  audit_log:
    columns:
      ip:
        type: faker.ipv4
"#;

    #[test]
    fn test_compile_orders_tables_and_columns() {
        let plan = compile(&config(CUSTOMERS)).unwrap();
        let names: Vec<_> = plan.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["audit_log", "customer_entity"]);

        let customers = &plan.tables[1];
        let columns: Vec<_> = customers.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(columns, vec!["email", "firstname", "lastname", "middlename"]);
        assert_eq!(customers.primary_key.as_deref(), Some("entity_id"));
        assert_eq!(
            customers.where_clause.as_deref(),
            Some("email NOT LIKE '%@company.com'")
        );
        assert_eq!(customers.limit, 0);
    }

    #[test]
    fn test_compile_selects_strategies() {
        let plan = compile(&config(CUSTOMERS)).unwrap();
        let customers = &plan.tables[1];
        let strategy = |name: &str| {
            customers
                .columns
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.strategy.clone())
                .unwrap()
        };

        assert_eq!(strategy("email"), Strategy::Synthetic("email".to_string()));
        assert_eq!(
            strategy("firstname"),
            Strategy::Fixed(FixedValue::Text("Jane".to_string()))
        );
        assert_eq!(strategy("middlename"), Strategy::Null);
        assert_eq!(
            strategy("lastname"),
            Strategy::Expression("CONCAT('Customer', entity_id)".to_string())
        );

        let formatter = |name: &str| {
            customers
                .columns
                .iter()
                .find(|c| c.name == name)
                .and_then(|c| c.formatter.clone())
        };
        assert_eq!(formatter("email").as_deref(), Some("lower"));
        assert_eq!(formatter("firstname"), None);
        assert_eq!(formatter("middlename"), None);
    }

    #[test]
    fn test_strategy_priority() {
        let column = ColumnConfig {
            kind: Some("faker.email".to_string()),
            value: Some(serde_json::json!("fixed")),
            expr: Some("UPPER(email)".to_string()),
            null: true,
            formatter: None,
        };
        assert_eq!(compile_strategy(&column).unwrap(), Strategy::Null);

        let column = ColumnConfig {
            null: false,
            ..column
        };
        assert_eq!(
            compile_strategy(&column).unwrap(),
            Strategy::Expression("UPPER(email)".to_string())
        );

        let column = ColumnConfig {
            expr: Some(String::new()),
            ..column
        };
        assert_eq!(
            compile_strategy(&column).unwrap(),
            Strategy::Fixed(FixedValue::Text("fixed".to_string()))
        );

        let column = ColumnConfig {
            value: None,
            ..column
        };
        assert_eq!(
            compile_strategy(&column).unwrap(),
            Strategy::Synthetic("email".to_string())
        );
    }

    #[test]
    fn test_unsupported_strategy_names_column() {
        let yaml = r#"
database: { host: h, user: u, name: n }
tables:
  users:
    columns:
      email:
        type: random_email
"#;
        let err = compile(&config(yaml)).unwrap_err();
        match &err {
            CompilationError::Column { table, column, source } => {
                assert_eq!(table, "users");
                assert_eq!(column, "email");
                assert_eq!(source, &StrategyError::Unsupported("random_email".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("users.email"));
    }

    #[test]
    fn test_column_without_strategy_is_rejected() {
        let err = compile_strategy(&ColumnConfig::default()).unwrap_err();
        assert_eq!(err, StrategyError::Unsupported(String::new()));
    }

    #[test]
    fn test_non_scalar_value_is_rejected() {
        let column = ColumnConfig {
            value: Some(serde_json::json!(["a", "b"])),
            ..Default::default()
        };
        assert_eq!(
            compile_strategy(&column).unwrap_err(),
            StrategyError::NonScalarValue("array")
        );
    }

    #[test]
    fn test_empty_generator_is_rejected() {
        let column = ColumnConfig {
            kind: Some("faker.".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile_strategy(&column).unwrap_err(),
            StrategyError::EmptyGenerator
        );
    }

    #[test]
    fn test_blank_optional_clauses_are_dropped() {
        let yaml = r#"
database: { host: h, user: u, name: n }
tables:
  users:
    where: "  "
    order_by: ""
    limit: 10
    columns:
      phone:
        "null": true
"#;
        let plan = compile(&config(yaml)).unwrap();
        assert_eq!(plan.tables[0].where_clause, None);
        assert_eq!(plan.tables[0].order_by, None);
        assert_eq!(plan.tables[0].primary_key, None);
        assert_eq!(plan.tables[0].limit, 10);
    }
}
