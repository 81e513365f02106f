//! Top-level configuration document, loading and validation.

use crate::database::DatabaseConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    /// A required setting is missing or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The document declares no tables
    #[error("no tables specified for anonymization")]
    NoTables,
}

/// Root of the configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,

    #[serde(default)]
    pub tables: BTreeMap<String, TableConfig>,
}

/// Anonymization rules for one table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Row filter, appended verbatim as a SQL predicate
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,

    /// Maximum number of rows to update, 0 for no limit
    #[serde(default)]
    pub limit: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Primary key column; looked up at run time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,

    #[serde(default)]
    pub columns: BTreeMap<String, ColumnConfig>,
}

/// Declaration for one column.
///
/// At most one of `null`, `expr`, `value` and `type` is expected to be set;
/// when several are, they win in that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Generator reference such as `faker.email`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Raw SQL expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,

    #[serde(default)]
    pub null: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

impl Config {
    /// Load and validate a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required settings and fill in defaults.
    fn validate(&mut self) -> Result<(), ConfigError> {
        let db = &mut self.database;
        if db.host.is_empty() {
            return Err(ConfigError::MissingField("database host"));
        }
        if db.user.is_empty() {
            return Err(ConfigError::MissingField("database user"));
        }
        if db.name.is_empty() {
            return Err(ConfigError::MissingField("database name"));
        }
        if db.port == 0 {
            db.port = db.driver.default_port();
        }

        if self.tables.is_empty() {
            return Err(ConfigError::NoTables);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Driver;
    use std::io::Write;

    const SAMPLE: &str = r#"
database:
  host: localhost
  port: 3306
  user: testuser
  password: testpass
  name: testdb
  driver: mysql

tables:
  customer_entity:
    columns:
      email:
        type: faker.email
      firstname:
        type: faker.firstname
      lastname:
        type: faker.lastname

  sales_order:
    where: "entity_id > 1000"
    limit: 50
    order_by: entity_id
    primary_key: entity_id
    columns:
      customer_email:
        type: faker.email
      customer_firstname:
        value: "John"
      customer_lastname:
        null: true
      customer_note:
        expr: "CONCAT('Customer ', entity_id)"
        formatter: upper
"#;

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml(SAMPLE).unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "testuser");
        assert_eq!(config.database.password, "testpass");
        assert_eq!(config.database.name, "testdb");
        assert_eq!(config.database.driver, Driver::MySQL);
        assert_eq!(config.tables.len(), 2);

        let orders = &config.tables["sales_order"];
        assert_eq!(orders.where_clause.as_deref(), Some("entity_id > 1000"));
        assert_eq!(orders.limit, 50);
        assert_eq!(orders.order_by.as_deref(), Some("entity_id"));
        assert_eq!(orders.primary_key.as_deref(), Some("entity_id"));
        assert_eq!(orders.columns.len(), 4);

        let firstname = &orders.columns["customer_firstname"];
        assert_eq!(firstname.value, Some(serde_json::json!("John")));
        assert!(orders.columns["customer_lastname"].null);
        assert_eq!(
            orders.columns["customer_note"].formatter.as_deref(),
            Some("upper")
        );

        let customers = &config.tables["customer_entity"];
        assert!(customers.where_clause.is_none());
        assert_eq!(customers.limit, 0);
        assert_eq!(
            customers.columns["email"].kind.as_deref(),
            Some("faker.email")
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "database": {"host": "pg", "user": "u", "name": "n", "driver": "postgres"},
            "tables": {"users": {"columns": {"email": {"type": "faker.email"}}}}
        }"#;
        let config = Config::from_json(json).unwrap();

        assert_eq!(config.database.driver, Driver::PostgreSQL);
        assert_eq!(config.database.port, 5432);
        assert!(config.tables.contains_key("users"));
    }

    #[test]
    fn test_from_file_picks_parser_by_extension() {
        let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        yaml_file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::from_file(yaml_file.path()).unwrap();
        assert_eq!(config.tables.len(), 2);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file
            .write_all(
                br#"{"database": {"host": "h", "user": "u", "name": "n"},
                     "tables": {"t": {"columns": {"c": {"null": true}}}}}"#,
            )
            .unwrap();
        let config = Config::from_file(json_file.path()).unwrap();
        assert!(config.tables["t"].columns["c"].null);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/anonymize.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_driver_and_port() {
        let yaml = r#"
database:
  host: localhost
  user: root
  name: shop
tables:
  users:
    columns:
      email:
        null: true
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.database.driver, Driver::MySQL);
        assert_eq!(config.database.port, 3306);
    }

    #[test]
    fn test_required_fields() {
        let missing_host = r#"
database:
  user: root
  name: shop
tables:
  users:
    columns: {}
"#;
        let err = Config::from_yaml(missing_host).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("database host")));

        let missing_user = r#"
database:
  host: localhost
  name: shop
tables:
  users:
    columns: {}
"#;
        let err = Config::from_yaml(missing_user).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("database user")));

        let missing_name = r#"
database:
  host: localhost
  user: root
tables:
  users:
    columns: {}
"#;
        let err = Config::from_yaml(missing_name).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("database name")));
    }

    #[test]
    fn test_unsupported_driver() {
        let yaml = r#"
database:
  host: localhost
  user: root
  name: shop
  driver: oracle
tables:
  users:
    columns: {}
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("unsupported database driver: oracle"));
    }

    #[test]
    fn test_no_tables() {
        let yaml = r#"
database:
  host: localhost
  user: root
  name: shop
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::NoTables));
    }
}
