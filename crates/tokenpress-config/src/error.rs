//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while assembling or using the pipeline configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was not provided.
    #[error("required configuration value missing")]
    Missing {
        /// Environment key of the missing value.
        key: &'static str,
    },
    /// A value was provided but could not be used.
    #[error("invalid configuration field")]
    InvalidField {
        /// Environment key of the offending value.
        key: &'static str,
        /// Offending value when it is safe to echo.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidField {
            key,
            value: Some(value.to_string()),
            reason,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
