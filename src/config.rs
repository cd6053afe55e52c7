//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every key has a bounded default so the
//! service never runs with an unbounded pool or an unbounded wait.

use std::net::SocketAddr;
use std::time::Duration;

/// Default connection string, pointing at the local compose database.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://user:pass@db:5432/telemetry";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// Newline-delimited JSON records.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`TelemetryConfig::from_env`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Upper bound in seconds for a single transactional insert.
    pub insert_timeout_secs: u64,

    /// Upper bound in seconds for handling a whole HTTP request.
    pub request_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

impl TelemetryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file, then
    /// falls back to defaults for every variable that is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed as a
    /// [`SocketAddr`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8000".to_string())
            .parse()?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10_u32).max(1);
        let database_min_connections =
            parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 1_u32).min(database_max_connections);
        let database_connect_timeout_secs =
            parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5_u64).max(1);
        let insert_timeout_secs = parse_or(&lookup, "INSERT_TIMEOUT_SECS", 5_u64).max(1);
        // The request bound must outlast the insert bound so a slow database
        // surfaces as a persistence error, not a bare request timeout.
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 10_u64)
            .max(insert_timeout_secs.saturating_add(1));

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
            insert_timeout_secs,
            request_timeout_secs,
            log_format,
        })
    }

    /// Pool acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.database_connect_timeout_secs)
    }

    /// Insert timeout as a [`Duration`].
    #[must_use]
    pub const fn insert_timeout(&self) -> Duration {
        Duration::from_secs(self.insert_timeout_secs)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parses a looked-up value as `T`, returning `default` on missing or
/// invalid values.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
