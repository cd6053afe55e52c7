//! A validated telemetry reading, ready to be persisted.

use serde::Serialize;

use super::CarId;

/// Single snapshot of a vehicle's state as reported by the vehicle.
///
/// Every measurement is optional; an absent value stays `None` all the way
/// to the database, where it is stored as `NULL`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReading {
    /// Reporting vehicle.
    pub car_id: CarId,
    /// Speed as reported by the vehicle.
    pub speed: Option<f64>,
    /// Temperature as reported by the vehicle.
    pub temperature: Option<f64>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
}

impl TelemetryReading {
    /// Creates a reading with only the vehicle identifier set.
    #[must_use]
    pub const fn new(car_id: CarId) -> Self {
        Self {
            car_id,
            speed: None,
            temperature: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Returns `true` when the reading carries a full position fix.
    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
