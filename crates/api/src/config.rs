//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDERS_API_KEY` - Shared secret for protected routes (falls back to
//!   the generic `API_KEY` variable)
//!
//! ## Optional
//! - `ORDERS_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDERS_PORT` - Listen port (default: 3000)
//! - `ORDERS_DB_PATH` - Path to the order file (default: db.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use orders_api_core::ApiKey;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Orders API configuration.
///
/// Built once in `main` and passed explicitly into the application state;
/// request logic never reads the environment.
#[derive(Debug, Clone)]
pub struct OrdersConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the JSON order file
    pub db_path: PathBuf,
    /// Shared secret required on protected routes
    pub api_key: ApiKey,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl OrdersConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing or empty, or if the
    /// host/port variables do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDERS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORDERS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_PORT".to_string(), e.to_string()))?;
        let db_path = PathBuf::from(get_env_or_default("ORDERS_DB_PATH", "db.json"));
        let api_key = get_api_key("ORDERS_API_KEY")?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            db_path,
            api_key,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get the API key with fallback to the generic `API_KEY` variable.
fn get_api_key(primary_key: &str) -> Result<ApiKey, ConfigError> {
    let value = std::env::var(primary_key)
        .or_else(|_| std::env::var("API_KEY"))
        .map_err(|_| ConfigError::MissingEnvVar(primary_key.to_string()))?;

    ApiKey::new(value)
        .map_err(|e| ConfigError::InvalidEnvVar(primary_key.to_string(), e.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> OrdersConfig {
        OrdersConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            db_path: PathBuf::from("db.json"),
            api_key: ApiKey::new("k9!x2@p5#q8&w1").unwrap(),
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = test_config();
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("k9!x2"));
    }
}
