//! Configuration management
//!
//! TOML-based configuration with `${VAR}` substitution and `TEXTVEIL_*`
//! environment variable overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{InputConfig, LoggingConfig, OutputConfig, TextveilConfig};
