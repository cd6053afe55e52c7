//! Data Transfer Objects for REST request/response serialization.

pub mod telemetry_dto;

pub use telemetry_dto::*;
