//! Engine configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pseudonymization engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dry-run mode (detect but don't rewrite or write output)
    #[serde(default)]
    pub dry_run: bool,

    /// Path to a pattern library TOML file (built-in patterns if unset)
    pub pattern_library: Option<PathBuf>,

    /// Fixed RNG seed for reproducible IDs and synthetic values
    pub seed: Option<u64>,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            pattern_library: None,
            seed: None,
            audit: AuditConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                anyhow::bail!("Pattern library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Pattern library must be a TOML file: {}", path.display());
            }
        }

        self.audit
            .validate()
            .context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TEXTVEIL_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid TEXTVEIL_DRY_RUN value")?;
        }

        if let Ok(val) = std::env::var("TEXTVEIL_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("TEXTVEIL_SEED") {
            self.seed = Some(val.parse().context("Invalid TEXTVEIL_SEED value")?);
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/pseudonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TEXTVEIL_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid TEXTVEIL_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("TEXTVEIL_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("TEXTVEIL_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid TEXTVEIL_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
