//! Server and store configuration

use axum::http::{header, HeaderValue, Method};
use portfolio_storage::PgStoreConfig;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Request bodies above this size are rejected
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Configuration errors, reported before anything is started
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL (or --database-url) is required for the postgres store")]
    MissingDatabaseUrl,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Resolved store selection
#[derive(Debug, Clone)]
pub enum StoreSettings {
    Postgres(PgStoreConfig),
    Memory,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed browser origins; empty means no CORS headers at all
    pub cors_origins: Vec<String>,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// CORS layer for the configured origins, if any
    pub fn cors_layer(&self) -> Result<Option<CorsLayer>, ConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.body_limit, 64 * 1024);
        assert!(config.cors_layer().unwrap().is_none());
    }

    #[test]
    fn test_cors_layer_for_origins() {
        let config = ServerConfig {
            cors_origins: vec!["https://komal.dev".to_string()],
            ..ServerConfig::default()
        };
        assert!(config.cors_layer().unwrap().is_some());
    }

    #[test]
    fn test_invalid_cors_origin() {
        let config = ServerConfig {
            cors_origins: vec!["bad\norigin".to_string()],
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.cors_layer(),
            Err(ConfigError::InvalidCorsOrigin(_))
        ));
    }
}
