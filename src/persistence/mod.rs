//! Persistence layer: transactional single-row inserts into `telemetry`.
//!
//! Provides the [`TelemetryStore`] trait that the ingestion service depends
//! on. [`PostgresStore`] is the production implementation backed by
//! `sqlx::PgPool`; [`MemoryStore`] keeps rows in process and is what the
//! HTTP tests run against.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use models::StoredReading;
pub use postgres::PostgresStore;

use crate::domain::TelemetryReading;
use crate::error::PersistenceError;

/// Durable storage for telemetry readings.
///
/// Implementations must be safe to share across concurrently handled
/// requests.
#[async_trait]
pub trait TelemetryStore: Send + Sync + std::fmt::Debug {
    /// Creates the `telemetry` table if it does not exist yet.
    ///
    /// Never alters an existing table, so calling it repeatedly is safe.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<(), PersistenceError>;

    /// Persists one reading inside its own transaction and returns the
    /// server-assigned row id.
    ///
    /// Either the row is committed or nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] carrying the driver message on any
    /// acquisition, statement, or commit failure.
    async fn insert(&self, reading: &TelemetryReading) -> Result<i32, PersistenceError>;

    /// Checks that the database answers.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the database is unreachable.
    async fn ping(&self) -> Result<(), PersistenceError>;
}
