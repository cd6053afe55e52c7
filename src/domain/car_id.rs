//! Validated vehicle identifier.
//!
//! [`CarId`] is a newtype over [`String`] that can only be constructed from
//! a non-empty value, so every reading handed to persistence satisfies the
//! `car_id NOT NULL` column with a meaningful identifier.

use std::fmt;

use serde::Serialize;

use crate::error::ApiError;

/// Identifier of the vehicle that reported a reading.
///
/// No uniqueness is implied: many readings share the same `CarId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CarId(String);

impl CarId {
    /// Wraps `value` as a `CarId`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPayload`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ApiError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ApiError::InvalidPayload(
                "car_id: must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CarId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
