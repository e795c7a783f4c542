//! Domain error types
//!
//! This module defines the error hierarchy for Textveil.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Textveil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TextveilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (malformed spans, bad offsets, overlapping ranges)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Pattern library errors (unreadable file, invalid regex)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Document processing errors
    #[error("Document error: {0}")]
    Document(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TextveilError {
    fn from(err: std::io::Error) -> Self {
        TextveilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TextveilError {
    fn from(err: serde_json::Error) -> Self {
        TextveilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TextveilError {
    fn from(err: toml::de::Error) -> Self {
        TextveilError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextveilError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_validation_error_display() {
        let err = TextveilError::Validation("span 2 overlaps span 1".to_string());
        assert_eq!(err.to_string(), "Validation error: span 2 overlaps span 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: TextveilError = io_err.into();
        assert!(matches!(err, TextveilError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TextveilError = json_err.into();
        assert!(matches!(err, TextveilError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: TextveilError = toml_err.into();
        assert!(matches!(err, TextveilError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = TextveilError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
