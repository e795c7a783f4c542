//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Textveil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Textveil - PII pseudonymization for text documents
#[derive(Parser, Debug)]
#[command(name = "textveil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "textveil.toml", env = "TEXTVEIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TEXTVEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pseudonymize a directory of documents
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
