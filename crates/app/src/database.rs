//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, raw_sql};

/// Bootstrap DDL, applied on startup. Idempotent, so reconnecting services
/// never race each other into a broken schema.
const SCHEMA_SQL: &str = include_str!("../schema.sql");

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction. Every service operation is a single unit of work
    /// against one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the bootstrap schema.
///
/// # Errors
///
/// Returns an error when any DDL statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    raw_sql(SCHEMA_SQL).execute(pool).await?;

    tracing::debug!("bootstrap schema applied");

    Ok(())
}
