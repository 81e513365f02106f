//! Configuration document for db-anonymizer.
//!
//! A configuration declares how to reach the database and, per table and
//! column, which transformation to apply:
//!
//! ```yaml
//! database:
//!   host: localhost
//!   user: app
//!   password: secret
//!   name: shop
//!   driver: mysql
//!
//! tables:
//!   customer_entity:
//!     where: "entity_id > 1000"
//!     columns:
//!       email:
//!         type: faker.email
//!       firstname:
//!         value: "John"
//!       lastname:
//!         null: true
//! ```
//!
//! Table and column maps are sorted by name; nothing downstream depends on
//! the order in which they appear in the file.

mod config;
mod database;

pub use config::{ColumnConfig, Config, ConfigError, TableConfig};
pub use database::{DatabaseConfig, Driver};
