//! PostgreSQL client and its [`Database`] implementation.

use anonymizer_config::DatabaseConfig;
use anonymizer_core::{Database, DatabaseError};
use anyhow::Context;
use async_trait::async_trait;
use tokio_postgres::types::Type;
use tokio_postgres::{Client, NoTls, Row};
use tracing::error;

const PRIMARY_KEY_QUERY: &str = "
    SELECT a.attname
    FROM pg_index i
    JOIN pg_attribute a ON a.attrelid = i.indrelid AND a.attnum = ANY(i.indkey)
    WHERE i.indrelid = $1::text::regclass
    AND i.indisprimary
    ORDER BY array_position(i.indkey, a.attnum)
    LIMIT 1
";

/// Create a new PostgreSQL client with connection handling
pub async fn new_postgresql_client(config: &DatabaseConfig) -> anyhow::Result<Client> {
    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(&config.host)
        .port(config.port)
        .user(&config.user)
        .dbname(&config.name);
    if !config.password.is_empty() {
        pg_config.password(&config.password);
    }

    let (client, connection) = pg_config
        .connect(NoTls)
        .await
        .context("failed to connect to database")?;

    // Spawn connection handler
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("PostgreSQL connection error: {e}");
        }
    });

    Ok(client)
}

/// Queries from concurrent chunks are pipelined over one connection.
pub struct PostgresDatabase {
    client: Client,
}

impl PostgresDatabase {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let client = new_postgresql_client(config).await?;
        client
            .simple_query("SELECT 1")
            .await
            .context("failed to ping database")?;
        Ok(Self { client })
    }
}

/// Integer key at `idx`, whatever its width.
fn key_at(row: &Row, idx: usize) -> Result<Option<i64>, DatabaseError> {
    let ty = row
        .columns()
        .get(idx)
        .map(|column| column.type_().clone())
        .ok_or_else(|| DatabaseError(format!("missing column {idx} in result")))?;

    let value = if ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)
    } else if ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx).map(|v| v.map(i64::from))
    } else if ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx).map(|v| v.map(i64::from))
    } else {
        return Err(DatabaseError(format!(
            "unsupported primary key type: {ty}"
        )));
    };
    value.map_err(DatabaseError::driver)
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn count(&self, sql: &str) -> Result<u64, DatabaseError> {
        let row = self
            .client
            .query_one(sql, &[])
            .await
            .map_err(DatabaseError::driver)?;
        let count: i64 = row.try_get(0).map_err(DatabaseError::driver)?;
        Ok(count.max(0) as u64)
    }

    async fn key_range(&self, sql: &str) -> Result<Option<(i64, i64)>, DatabaseError> {
        let row = self
            .client
            .query_one(sql, &[])
            .await
            .map_err(DatabaseError::driver)?;
        Ok(key_at(&row, 0)?.zip(key_at(&row, 1)?))
    }

    async fn keys_in_window(&self, sql: &str) -> Result<Vec<i64>, DatabaseError> {
        let rows = self
            .client
            .query(sql, &[])
            .await
            .map_err(DatabaseError::driver)?;
        rows.iter()
            .map(|row| {
                key_at(row, 0)?.ok_or_else(|| DatabaseError("NULL primary key value".to_string()))
            })
            .collect()
    }

    async fn execute(&self, sql: &str) -> Result<u64, DatabaseError> {
        self.client
            .execute(sql, &[])
            .await
            .map_err(DatabaseError::driver)
    }

    async fn discover_primary_key(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        let row = self
            .client
            .query_opt(PRIMARY_KEY_QUERY, &[&table])
            .await
            .map_err(DatabaseError::driver)?;
        row.map(|row| row.try_get::<_, String>(0))
            .transpose()
            .map_err(DatabaseError::driver)
    }
}
