//! Error types with HTTP status code mapping.
//!
//! [`PersistenceError`] is what the storage layer returns; [`ApiError`] is
//! the handler-facing error. Each [`ApiError`] variant maps to one HTTP
//! status code and a `{"detail": "..."}` JSON body.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// ```json
/// { "detail": "missing field `car_id` at line 1 column 2" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub detail: String,
}

/// Failure while talking to the database.
///
/// The display form is the underlying driver message, unmodified, so it can
/// be surfaced to the client as-is.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Error reported by the database driver or the connection pool.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The operation did not finish within its time bound and was abandoned.
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Handler-level error enum with HTTP status code mapping.
///
/// | Variant          | HTTP Status                 |
/// |------------------|-----------------------------|
/// | `InvalidPayload` | 422 Unprocessable Entity    |
/// | `Persistence`    | 500 Internal Server Error   |
/// | `Internal`       | 500 Internal Server Error   |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed shape validation.
    #[error("{0}")]
    InvalidPayload(String),

    /// Persistence layer failure.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_error_keeps_driver_message() {
        let err = ApiError::from(PersistenceError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn timeout_names_the_bound() {
        let err = PersistenceError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "database operation timed out after 5s");
    }

    #[test]
    fn invalid_payload_is_unprocessable() {
        let err = ApiError::InvalidPayload("car_id: must not be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
