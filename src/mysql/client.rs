//! MySQL connection pool and its [`Database`] implementation.

use anonymizer_config::DatabaseConfig;
use anonymizer_core::{Database, DatabaseError};
use anyhow::Context;
use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, OptsBuilder, Pool, PoolConstraints, PoolOpts};

/// Upper bound on pooled connections. Callers beyond it wait for a free one.
pub const MAX_CONNECTIONS: usize = 25;

const PRIMARY_KEY_QUERY: &str = "
    SELECT COLUMN_NAME
    FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE
    WHERE TABLE_SCHEMA = DATABASE()
    AND TABLE_NAME = ?
    AND CONSTRAINT_NAME = 'PRIMARY'
    ORDER BY ORDINAL_POSITION
    LIMIT 1
";

/// Create a new MySQL connection pool
pub fn new_mysql_pool(config: &DatabaseConfig) -> anyhow::Result<Pool> {
    let constraints = PoolConstraints::new(1, MAX_CONNECTIONS)
        .context("invalid MySQL pool constraints")?;
    let password = (!config.password.is_empty()).then(|| config.password.clone());

    let opts = OptsBuilder::default()
        .ip_or_hostname(config.host.clone())
        .tcp_port(config.port)
        .user(Some(config.user.clone()))
        .pass(password)
        .db_name(Some(config.name.clone()))
        .pool_opts(PoolOpts::default().with_constraints(constraints));

    Ok(Pool::new(opts))
}

pub struct MySqlDatabase {
    pool: Pool,
}

impl MySqlDatabase {
    /// Build the pool and check that the server is reachable.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = new_mysql_pool(config)?;
        let mut conn = pool
            .get_conn()
            .await
            .context("failed to connect to database")?;
        conn.ping().await.context("failed to ping database")?;
        Ok(Self { pool })
    }

    async fn conn(&self) -> Result<Conn, DatabaseError> {
        self.pool.get_conn().await.map_err(DatabaseError::driver)
    }
}

#[async_trait]
impl Database for MySqlDatabase {
    async fn count(&self, sql: &str) -> Result<u64, DatabaseError> {
        let mut conn = self.conn().await?;
        let count: Option<u64> = conn.query_first(sql).await.map_err(DatabaseError::driver)?;
        Ok(count.unwrap_or(0))
    }

    async fn key_range(&self, sql: &str) -> Result<Option<(i64, i64)>, DatabaseError> {
        let mut conn = self.conn().await?;
        let bounds: Option<(Option<i64>, Option<i64>)> =
            conn.query_first(sql).await.map_err(DatabaseError::driver)?;
        Ok(bounds.and_then(|(min, max)| min.zip(max)))
    }

    async fn keys_in_window(&self, sql: &str) -> Result<Vec<i64>, DatabaseError> {
        let mut conn = self.conn().await?;
        conn.query(sql).await.map_err(DatabaseError::driver)
    }

    async fn execute(&self, sql: &str) -> Result<u64, DatabaseError> {
        let mut conn = self.conn().await?;
        conn.query_drop(sql).await.map_err(DatabaseError::driver)?;
        Ok(conn.affected_rows())
    }

    async fn discover_primary_key(&self, table: &str) -> Result<Option<String>, DatabaseError> {
        let mut conn = self.conn().await?;
        conn.exec_first(PRIMARY_KEY_QUERY, (table,))
            .await
            .map_err(DatabaseError::driver)
    }

    async fn close(&self) -> Result<(), DatabaseError> {
        self.pool
            .clone()
            .disconnect()
            .await
            .map_err(DatabaseError::driver)
    }
}
