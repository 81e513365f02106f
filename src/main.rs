//! Command-line interface for anonymize-db
//!
//! # Usage Examples
//!
//! ```bash
//! # Dry run against the database named in the configuration
//! anonymize-db --config anonymize.yaml --dry-run
//!
//! # Real run, JSON report in ./logs/report.json
//! anonymize-db --config anonymize.yaml --report json
//!
//! # Tables without a configured primary_key use the schema's key
//! anonymize-db --config anonymize.yaml --discover-primary-keys --workers 4
//! ```
//!
//! ## Configuration
//! ```yaml
//! database:
//!   driver: mysql
//!   host: localhost
//!   user: root
//!   password: secret
//!   name: shop
//! tables:
//!   customer_entity:
//!     primary_key: entity_id
//!     where: "email NOT LIKE '%@company.com'"
//!     columns:
//!       email:
//!         type: faker.email
//!       firstname:
//!         value: "John"
//!       dob:
//!         "null": true
//! ```

use clap::Parser;
use db_anonymizer::AnonymizeOpts;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let opts = AnonymizeOpts::parse();
    db_anonymizer::run(opts).await
}
