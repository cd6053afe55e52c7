//! PostgreSQL implementation of the persistence layer.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::TelemetryStore;
use crate::config::TelemetryConfig;
use crate::domain::TelemetryReading;
use crate::error::PersistenceError;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS telemetry (\
     id SERIAL PRIMARY KEY, \
     car_id VARCHAR(50) NOT NULL, \
     speed DOUBLE PRECISION, \
     temperature DOUBLE PRECISION, \
     latitude DOUBLE PRECISION, \
     longitude DOUBLE PRECISION)";

const INSERT_SQL: &str = "INSERT INTO telemetry (car_id, speed, temperature, latitude, longitude) \
     VALUES ($1, $2, $3, $4, $5) RETURNING id";

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a bounded connection pool as described by `config`.
    ///
    /// Pooled connections are pinged before being handed out, so a
    /// connection dropped by the server is replaced instead of failing the
    /// next insert.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the initial connection cannot be
    /// established.
    pub async fn connect(config: &TelemetryConfig) -> Result<Self, PersistenceError> {
        let pool = pool_options(config).connect(&config.database_url).await?;
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every pooled connection, waiting for checked-out ones to be
    /// returned first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Pool options shared by eager and lazy construction.
#[must_use]
pub fn pool_options(config: &TelemetryConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(config.connect_timeout())
        .test_before_acquire(true)
}

#[async_trait]
impl TelemetryStore for PostgresStore {
    async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, reading: &TelemetryReading) -> Result<i32, PersistenceError> {
        // Dropping `tx` before commit rolls back and returns the connection.
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(INSERT_SQL)
            .bind(reading.car_id.as_str())
            .bind(reading.speed)
            .bind(reading.temperature)
            .bind(reading.latitude)
            .bind(reading.longitude)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
