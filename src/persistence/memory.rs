//! In-process store used in place of PostgreSQL.
//!
//! [`MemoryStore`] mirrors the observable contract of the real table: ids
//! are assigned from a monotonically increasing sequence and never reused,
//! and a failed insert leaves no row behind. It can be switched to an
//! unavailable state to exercise the failure path.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoredReading, TelemetryStore};
use crate::domain::TelemetryReading;
use crate::error::PersistenceError;

/// In-memory [`TelemetryStore`].
#[derive(Debug)]
pub struct MemoryStore {
    rows: RwLock<Vec<StoredReading>>,
    next_id: AtomicI32,
    available: AtomicBool,
    schema_calls: AtomicI32,
}

impl MemoryStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
            available: AtomicBool::new(true),
            schema_calls: AtomicI32::new(0),
        }
    }

    /// Simulates the database going away (`false`) or coming back (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns a copy of every stored row, in insertion order.
    pub async fn rows(&self) -> Vec<StoredReading> {
        self.rows.read().await.clone()
    }

    /// Returns the number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns `true` if no row has been stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Number of times [`TelemetryStore::ensure_schema`] succeeded.
    #[must_use]
    pub fn schema_calls(&self) -> i32 {
        self.schema_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), PersistenceError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(PersistenceError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelemetryStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        self.check_available()?;
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert(&self, reading: &TelemetryReading) -> Result<i32, PersistenceError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.push(StoredReading {
            id,
            car_id: reading.car_id.as_str().to_string(),
            speed: reading.speed,
            temperature: reading.temperature,
            latitude: reading.latitude,
            longitude: reading.longitude,
        });
        Ok(id)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        self.check_available()
    }
}
