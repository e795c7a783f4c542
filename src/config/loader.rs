//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TextveilConfig;
use crate::domain::errors::TextveilError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TextveilConfig
/// 4. Applies environment variable overrides (TEXTVEIL_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use textveil::config::loader::load_config;
///
/// let config = load_config("textveil.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TextveilConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TextveilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TextveilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: TextveilConfig = toml::from_str(&contents)
        .map_err(|e| TextveilError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        TextveilError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TextveilError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies TEXTVEIL_* environment variable overrides
fn apply_env_overrides(config: &mut TextveilConfig) -> Result<()> {
    if let Ok(val) = std::env::var("TEXTVEIL_INPUT_DIR") {
        config.input.dir = PathBuf::from(val);
    }

    if let Ok(val) = std::env::var("TEXTVEIL_INPUT_EXTENSION") {
        config.input.extension = val;
    }

    if let Ok(val) = std::env::var("TEXTVEIL_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(val);
    }

    config
        .engine
        .apply_env_overrides()
        .map_err(|e| TextveilError::Configuration(e.to_string()))?;

    Ok(())
}
