//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `textveil.toml` file.

use crate::engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Textveil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TextveilConfig {
    /// Input document settings
    #[serde(default)]
    pub input: InputConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Pseudonymization engine settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TextveilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.input.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        self.engine.validate().map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// Input document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory to read documents from
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,

    /// File extension to pick up (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("./documents")
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
            extension: default_extension(),
        }
    }
}

impl InputConfig {
    /// Validate input settings
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("input.extension must not be empty".to_string());
        }
        if self.extension.starts_with('.') {
            return Err(format!(
                "input.extension must not include the dot: {}",
                self.extension
            ));
        }
        Ok(())
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory to write anonymized documents to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./anonymized")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl OutputConfig {
    /// Validate output settings
    pub fn validate(&self) -> Result<(), String> {
        if self.dir.as_os_str().is_empty() {
            return Err("output.dir must not be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy ("daily" or "hourly")
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging settings
    pub fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "logging.local_rotation must be 'daily' or 'hourly', got '{other}'"
            )),
        }
    }
}
