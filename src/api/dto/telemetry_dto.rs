//! Telemetry ingestion DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CarId, TelemetryReading};
use crate::error::ApiError;

/// Request body for `POST /vehicle`.
///
/// Unknown fields are ignored. Numeric fields that are absent or `null`
/// stay `None`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TelemetryReadingRequest {
    /// Identifier of the reporting vehicle (non-empty, up to 50 characters).
    #[schema(example = "car-1")]
    pub car_id: String,
    /// Vehicle speed.
    #[serde(default)]
    #[schema(example = 72.5)]
    pub speed: Option<f64>,
    /// Engine or cabin temperature.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl TryFrom<TelemetryReadingRequest> for TelemetryReading {
    type Error = ApiError;

    fn try_from(req: TelemetryReadingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            car_id: CarId::new(req.car_id)?,
            speed: req.speed,
            temperature: req.temperature,
            latitude: req.latitude,
            longitude: req.longitude,
        })
    }
}

/// Response body for a successfully stored reading.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    /// Always `"received"`.
    #[schema(example = "received")]
    pub status: String,
}

impl IngestResponse {
    /// The acknowledgement returned for every stored reading.
    #[must_use]
    pub fn received() -> Self {
        Self {
            status: "received".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_none_not_zero() {
        let Ok(req) = serde_json::from_str::<TelemetryReadingRequest>(r#"{"car_id":"car-1"}"#)
        else {
            panic!("minimal payload must parse");
        };
        assert_eq!(req.speed, None);
        assert_eq!(req.temperature, None);
        assert_eq!(req.latitude, None);
        assert_eq!(req.longitude, None);
    }

    #[test]
    fn explicit_null_is_none() {
        let Ok(req) = serde_json::from_str::<TelemetryReadingRequest>(
            r#"{"car_id":"car-1","speed":null,"latitude":48.85}"#,
        ) else {
            panic!("payload must parse");
        };
        assert_eq!(req.speed, None);
        assert_eq!(req.latitude, Some(48.85));
    }

    #[test]
    fn integers_are_accepted_as_floats() {
        let Ok(req) =
            serde_json::from_str::<TelemetryReadingRequest>(r#"{"car_id":"c","speed":90}"#)
        else {
            panic!("integer speed must parse");
        };
        assert_eq!(req.speed, Some(90.0));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(serde_json::from_str::<TelemetryReadingRequest>(r#"{"car_id":7}"#).is_err());
        assert!(
            serde_json::from_str::<TelemetryReadingRequest>(r#"{"car_id":"c","speed":"fast"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<TelemetryReadingRequest>("{}").is_err());
    }

    #[test]
    fn conversion_rejects_empty_car_id() {
        let req = TelemetryReadingRequest {
            car_id: String::new(),
            speed: None,
            temperature: None,
            latitude: None,
            longitude: None,
        };
        assert!(matches!(
            TelemetryReading::try_from(req),
            Err(ApiError::InvalidPayload(_))
        ));
    }
}
