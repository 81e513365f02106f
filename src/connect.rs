use crate::mysql::MySqlDatabase;
use crate::postgresql::PostgresDatabase;
use anonymizer_config::{DatabaseConfig, Driver};
use anonymizer_core::Database;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

// Connect to the configured database
pub async fn connect_to_database(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn Database>> {
    let target = config.redacted_url();
    info!("Connecting to {target}");

    let db: Arc<dyn Database> = match config.driver {
        Driver::MySQL => Arc::new(
            MySqlDatabase::connect(config)
                .await
                .with_context(|| format!("Failed to connect to {target}"))?,
        ),
        Driver::PostgreSQL => Arc::new(
            PostgresDatabase::connect(config)
                .await
                .with_context(|| format!("Failed to connect to {target}"))?,
        ),
    };

    Ok(db)
}
