//! Server Configuration
//!
//! Everything is read from the process environment (after `.env` has been
//! loaded by the binary). Parsing goes through a lookup function so tests can
//! feed values without touching the real environment.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_CORS_MAX_AGE: Duration = Duration::from_secs(300);

/// Error while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`)
    pub max_connections: u32,
    /// Per-request deadline (`REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,
    /// Preflight cache lifetime (`CORS_MAX_AGE_SECS`)
    pub cors_max_age: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let request_timeout = Duration::from_secs(parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?);
        let cors_max_age = Duration::from_secs(parse_or(
            &lookup,
            "CORS_MAX_AGE_SECS",
            DEFAULT_CORS_MAX_AGE.as_secs(),
        )?);

        Ok(Self {
            database_url,
            port,
            max_connections,
            request_timeout,
            cors_max_age,
        })
    }

    /// Bind on all interfaces
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parse an optional variable; unset or blank falls back to `default`.
fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        _ => Ok(default),
    }
}
