//! Init command implementation
//!
//! Writes a commented starter configuration file.

use clap::Args;
use std::path::Path;

const STARTER_CONFIG: &str = r#"# Textveil configuration

[input]
# Directory of plain-text documents to pseudonymize
dir = "./documents"
# File extension to pick up (without the dot)
extension = "txt"

[output]
# Anonymized copies are written here, keyed by the input's base filename
dir = "./anonymized"

[engine]
# Detect PII without rewriting or writing output
dry_run = false
# Path to a custom pattern library (built-in patterns if unset)
# pattern_library = "patterns/pii_patterns.toml"
# Fixed RNG seed for reproducible IDs and synthetic values
# seed = 42

[engine.audit]
# Append a JSONL audit record per document; original values are hashed
enabled = true
log_path = "./audit/pseudonymization.log"
json_format = true

[logging]
# Console logging is always on; enable file logging here
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to write the configuration file to
    #[arg(long, default_value = "textveil.toml")]
    pub path: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.path);

        if path.exists() && !self.force {
            eprintln!(
                "Refusing to overwrite existing {} (use --force)",
                path.display()
            );
            return Ok(2);
        }

        tokio::fs::write(path, STARTER_CONFIG).await?;
        println!("Wrote starter configuration to {}", path.display());
        Ok(0)
    }
}
