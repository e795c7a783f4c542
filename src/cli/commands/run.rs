//! Run command implementation
//!
//! This module implements the `run` command that pseudonymizes every
//! document in the input directory and prints the run report.

use crate::config::load_config;
use crate::core::RunCoordinator;
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the input directory
    #[arg(long)]
    pub input: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output: Option<String>,

    /// Dry run mode - detect PII without rewriting or writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Fixed RNG seed for reproducible IDs and synthetic values
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        // Load configuration; fall back to defaults when no file exists so
        // `textveil run --input dir` works without an init step
        let mut config = if std::path::Path::new(config_path).exists() {
            load_config(config_path)?
        } else {
            tracing::info!(config = %config_path, "No configuration file, using defaults");
            crate::config::TextveilConfig::default()
        };

        // Apply CLI overrides
        if let Some(ref input) = self.input {
            tracing::info!(input = %input, "Overriding input directory from CLI");
            config.input.dir = PathBuf::from(input);
        }

        if let Some(ref output) = self.output {
            tracing::info!(output = %output, "Overriding output directory from CLI");
            config.output.dir = PathBuf::from(output);
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.engine.dry_run = true;
        }

        if let Some(seed) = self.seed {
            tracing::info!(seed = seed, "Using fixed seed from CLI");
            config.engine.seed = Some(seed);
        }

        let coordinator = RunCoordinator::new(config)?;
        let report = coordinator.execute(shutdown_signal).await?;

        println!("{}", report.render());

        if report.total_documents == 0 && !report.warnings.is_empty() {
            return Ok(1);
        }
        Ok(0)
    }
}
