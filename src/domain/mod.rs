//! Domain layer: validated telemetry types.
//!
//! Values in this module have already passed request-shape validation;
//! the persistence layer accepts nothing else.

pub mod car_id;
pub mod reading;

pub use car_id::CarId;
pub use reading::TelemetryReading;
