//! Vehicle telemetry ingestion handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{IngestResponse, TelemetryReadingRequest};
use crate::app_state::AppState;
use crate::domain::TelemetryReading;
use crate::error::{ApiError, ErrorResponse};

/// `POST /vehicle` — Ingest one telemetry reading.
///
/// Any failure to extract the JSON body is reported as 422 rather than
/// axum's default 400/415 split.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPayload`] on a malformed body and
/// [`ApiError::Persistence`] when the reading cannot be stored.
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = "Telemetry",
    summary = "Ingest a telemetry reading",
    description = "Validates the reading and stores it as one row of the `telemetry` table. Optional measurements that are omitted are stored as NULL.",
    request_body = TelemetryReadingRequest,
    responses(
        (status = 200, description = "Reading stored", body = IngestResponse),
        (status = 422, description = "Malformed reading", body = ErrorResponse),
        (status = 500, description = "Reading could not be stored", body = ErrorResponse),
    )
)]
pub async fn ingest_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<TelemetryReadingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let reading = TelemetryReading::try_from(req)?;

    state.telemetry_service.ingest(reading).await?;

    Ok((StatusCode::OK, Json(IngestResponse::received())))
}

/// Vehicle routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/vehicle", post(ingest_vehicle))
}
