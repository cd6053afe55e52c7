//! Database models for persisted readings.

use serde::{Deserialize, Serialize};

/// A stored row from the `telemetry` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredReading {
    /// Auto-increment row ID.
    pub id: i32,
    /// Reporting vehicle.
    pub car_id: String,
    /// Speed, `NULL` when not reported.
    pub speed: Option<f64>,
    /// Temperature, `NULL` when not reported.
    pub temperature: Option<f64>,
    /// Latitude, `NULL` when not reported.
    pub latitude: Option<f64>,
    /// Longitude, `NULL` when not reported.
    pub longitude: Option<f64>,
}
