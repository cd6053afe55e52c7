//! OpenAPI document for the service.

use axum::Json;
use axum::response::IntoResponse;
use utoipa::OpenApi;

use super::dto::{IngestResponse, TelemetryReadingRequest};
use super::handlers::system::HealthResponse;
use crate::error::ErrorResponse;

/// OpenAPI 3 description of every public endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Vehicle Telemetry API",
        description = "Ingests vehicle telemetry readings and stores them in PostgreSQL."
    ),
    paths(
        crate::api::handlers::vehicle::ingest_vehicle,
        crate::api::handlers::system::health_handler,
    ),
    components(schemas(TelemetryReadingRequest, IngestResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "Telemetry", description = "Telemetry ingestion"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json` — Raw OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
