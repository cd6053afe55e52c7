//! Telemetry service: validates readings and persists them.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::TelemetryReading;
use crate::error::{ApiError, PersistenceError};
use crate::persistence::TelemetryStore;

/// Orchestration layer for ingesting readings.
///
/// Stateless coordinator: owns a shared handle to the store and the insert
/// time bound. Every ingestion follows the pattern: spawn → insert under
/// timeout → log → return row id.
#[derive(Debug, Clone)]
pub struct TelemetryService {
    store: Arc<dyn TelemetryStore>,
    insert_timeout: Duration,
}

impl TelemetryService {
    /// Creates a new `TelemetryService`.
    #[must_use]
    pub fn new(store: Arc<dyn TelemetryStore>, insert_timeout: Duration) -> Self {
        Self {
            store,
            insert_timeout,
        }
    }

    /// Persists one reading and returns its row id.
    ///
    /// The insert runs on its own task: if the caller is dropped (client
    /// disconnect), the transaction still commits or rolls back. If the
    /// insert exceeds the configured bound it is abandoned, which rolls the
    /// transaction back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the store fails or times out,
    /// and [`ApiError::Internal`] if the insert task panicked.
    pub async fn ingest(&self, reading: TelemetryReading) -> Result<i32, ApiError> {
        let store = Arc::clone(&self.store);
        let bound = self.insert_timeout;

        let task = tokio::spawn(async move {
            match tokio::time::timeout(bound, store.insert(&reading)).await {
                Ok(result) => result.map(|id| (id, reading)),
                Err(_) => Err(PersistenceError::Timeout(bound)),
            }
        });

        match task.await {
            Ok(Ok((id, reading))) => {
                tracing::info!(
                    id,
                    car_id = %reading.car_id,
                    has_position = reading.has_position(),
                    "reading stored"
                );
                Ok(id)
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "failed to store reading");
                Err(ApiError::Persistence(e))
            }
            Err(e) => {
                tracing::error!(error = %e, "insert task aborted");
                Err(ApiError::Internal(e.to_string()))
            }
        }
    }

    /// Returns `true` if the database answers a ping.
    pub async fn database_up(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }
}
