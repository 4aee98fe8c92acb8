//! Error types for the portfolio data contract

use std::path::PathBuf;
use thiserror::Error;

/// Contact submission rejected before reaching the store
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Payload could not be decoded into the expected shape
    #[error("Invalid input: {0}")]
    Malformed(String),

    /// Payload decoded but one or more field rules failed
    #[error("Invalid input: {0}")]
    Rejected(#[from] validator::ValidationErrors),
}

impl ValidationError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ValidationError::Malformed(msg.into())
    }

    /// Short label for logs. Unlike `Display`, never echoes submitted values.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Malformed(_) => "malformed",
            ValidationError::Rejected(_) => "rejected",
        }
    }

    /// Names of the fields whose rules failed, sorted. Empty for malformed
    /// payloads.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ValidationError::Malformed(_) => Vec::new(),
            ValidationError::Rejected(errors) => {
                let mut fields: Vec<&'static str> = errors.field_errors().into_keys().collect();
                fields.sort_unstable();
                fields
            }
        }
    }
}

/// Failure loading a seed dataset from disk
#[derive(Error, Debug)]
pub enum SeedLoadError {
    #[error("Cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error in seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::malformed("missing field `email`");
        assert_eq!(err.to_string(), "Invalid input: missing field `email`");
    }

    #[test]
    fn test_malformed_kind_has_no_fields() {
        let err = ValidationError::malformed("invalid type: string \"secret\"");
        assert_eq!(err.kind(), "malformed");
        assert!(err.fields().is_empty());
    }

    #[test]
    fn test_seed_io_error_names_path() {
        let err = SeedLoadError::Io {
            path: PathBuf::from("/nope/seed.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope/seed.json"));
    }
}
