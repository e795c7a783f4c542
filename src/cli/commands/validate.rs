//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_path, "Validating configuration");

        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid: {config_path}");
                println!("  input dir:  {}", config.input.dir.display());
                println!("  output dir: {}", config.output.dir.display());
                println!("  dry run:    {}", config.engine.dry_run);
                println!("  audit:      {}", config.engine.audit.enabled);
                Ok(0)
            }
            Err(e) => {
                eprintln!("Configuration is invalid: {e}");
                Ok(2)
            }
        }
    }
}
