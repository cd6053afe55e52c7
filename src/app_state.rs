//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::TelemetryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ingestion service, owning the handle to the store.
    pub telemetry_service: Arc<TelemetryService>,
}

impl AppState {
    /// Wraps `telemetry_service` for sharing across handlers.
    #[must_use]
    pub fn new(telemetry_service: TelemetryService) -> Self {
        Self {
            telemetry_service: Arc::new(telemetry_service),
        }
    }
}
