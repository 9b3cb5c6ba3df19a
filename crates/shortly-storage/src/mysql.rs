use crate::validate_table_name;
use async_trait::async_trait;
use jiff::Timestamp;
use shortly_core::repository::Result;
use shortly_core::{ReadRepository, Repository, ShortCode, ShortLinkRecord, StorageError};
use sqlx::{MySqlPool, Row};
use tracing::trace;

const CREATE_TABLE_TEMPLATE: &str = include_str!("../ddl/mysql/short_links.sql");

/// MySQL implementation of the repository contract.
///
/// Writes use `REPLACE INTO`, so a colliding code replaces the previous
/// row. `created_at` is stored as Unix milliseconds.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
    table: String,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_table_name(&table, &[])?;
        Ok(Self { pool, table })
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str, table: impl Into<String>) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Self::new(pool, table)
    }

    /// Creates the backing table if it does not exist yet.
    pub async fn create_table(&self) -> Result<()> {
        let ddl = CREATE_TABLE_TEMPLATE.replace("{table}", &self.table);
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Returns the configured table name.
    pub fn table(&self) -> &str {
        &self.table
    }
}

fn parse_created_at(millis: i64) -> Result<Timestamp> {
    Timestamp::from_millisecond(millis).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", millis))
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::Configuration(_) => StorageError::InvalidConfig(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>> {
        trace!(code = %code, table = %self.table, "mysql get");

        let sql = format!(
            "SELECT long_url, created_at FROM `{}` WHERE short_code = ? LIMIT 1",
            self.table
        );
        let row = sqlx::query(&sql)
            .bind(code.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let long_url: String = row.try_get("long_url").map_err(map_sqlx_error)?;
        let created_at_raw: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

        Ok(Some(ShortLinkRecord {
            short_code: code.clone(),
            long_url,
            created_at: parse_created_at(created_at_raw)?,
        }))
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn put(&self, record: ShortLinkRecord) -> Result<()> {
        trace!(code = %record.short_code, table = %self.table, "mysql put");

        let sql = format!(
            "REPLACE INTO `{}` (short_code, long_url, created_at) VALUES (?, ?, ?)",
            self.table
        );
        sqlx::query(&sql)
            .bind(record.short_code.as_str())
            .bind(record.long_url)
            .bind(record.created_at.as_millisecond())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
