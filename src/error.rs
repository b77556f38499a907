//! Unified error types for ringclock
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! Store mutations never fail: adding past capacity or touching an unknown
//! clock is a silent no-op. Errors only arise at the edges, when raw text
//! from an input field or a config file is turned into domain values.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (file operations, terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Period text could not be read as a number
    #[error("Invalid period: '{0}' (expected a whole number between 1 and 60)")]
    InvalidPeriod(String),

    /// Color text is not a hex color
    #[error("Invalid color: '{0}' (expected #rrggbb or #rgb)")]
    InvalidColor(String),

    /// Unit name is neither seconds nor minutes
    #[error("Invalid unit: '{0}' (expected 'sec' or 'min')")]
    InvalidUnit(String),

    /// Gradient needs two or three stops
    #[error("Invalid gradient: {0} stops (must be 2 or 3)")]
    InvalidStopCount(usize),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::InvalidPeriod("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid period: 'abc' (expected a whole number between 1 and 60)"
        );
    }

    #[test]
    fn test_color_error_display() {
        let err = DomainError::InvalidColor("#zzz".to_string());
        assert!(err.to_string().contains("#zzz"));
        assert!(err.to_string().contains("#rrggbb"));
    }

    #[test]
    fn test_config_value_error_display() {
        let err = ConfigError::InvalidValue {
            key: "general.capacity".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("general.capacity"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_conversion() {
        let domain_err = DomainError::InvalidStopCount(4);
        let app_err: AppError = domain_err.into();
        assert!(matches!(app_err, AppError::Domain(_)));
    }
}
