//! Service layer: ingestion orchestration.
//!
//! [`TelemetryService`] sits between the HTTP handlers and the
//! [`crate::persistence::TelemetryStore`], bounding every insert in time
//! and detaching it from the request so a client disconnect cannot leave a
//! transaction half-done.

pub mod telemetry_service;

pub use telemetry_service::TelemetryService;
