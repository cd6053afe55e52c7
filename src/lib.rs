//! # vehicle-telemetry
//!
//! HTTP ingestion service for vehicle telemetry readings.
//!
//! A reading posted to `POST /vehicle` is shape-checked, then written as a
//! single row of the `telemetry` table inside its own transaction. There is
//! no read path: the service is a straight-through writer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── TelemetryService (service/)
//!     │
//!     ├── TelemetryStore (persistence/)
//!     │
//!     └── PostgreSQL (sqlx::PgPool)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
