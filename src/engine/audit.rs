//! Audit logger for pseudonymization operations

use crate::engine::pipeline::DocumentOutcome;
use crate::engine::span::SpanRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document_id: String,
    span_count: usize,
    identity_classes: usize,
    recall: f64,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    start: usize,
    end: usize,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for pseudonymization operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one processed document
    pub fn log_document(&self, outcome: &DocumentOutcome) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            document_id: outcome.document_id.clone(),
            span_count: outcome.spans.len(),
            identity_classes: outcome.identity_classes,
            recall: outcome.recall,
            processing_time_ms: outcome.processing_time_ms,
            detections: outcome
                .spans
                .iter()
                .map(|s| self.create_audit_detection(s))
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Create an audit detection entry with hashed PII value
    fn create_audit_detection(&self, span: &SpanRecord) -> AuditDetection {
        AuditDetection {
            category: span.category.label().to_string(),
            start: span.start,
            end: span.end,
            value_hash: self.hash_pii_value(&span.value),
        }
    }

    /// Hash a PII value using SHA-256
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            // Plain text format
            writeln!(
                file,
                "[{}] Document: {} | Spans: {} | Classes: {} | Recall: {:.3} | Time: {}ms",
                entry.timestamp,
                entry.document_id,
                entry.span_count,
                entry.identity_classes,
                entry.recall,
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::span::PiiCategory;
    use chrono::Utc;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn sample_outcome() -> DocumentOutcome {
        let mut span = SpanRecord::new("Alice", PiiCategory::Person, 0, 5);
        span.identity_id = Some(17);
        DocumentOutcome {
            document_id: "doc-1.txt".to_string(),
            anonymized_text: "Emma Davis waved.".to_string(),
            spans: vec![span],
            identity_classes: 1,
            recall: 1.0,
            processing_time_ms: 3,
            timestamp: Utc::now(),
            stats_by_category: HashMap::from([(PiiCategory::Person, 1)]),
        }
    }

    #[test]
    fn test_audit_logger_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");

        let logger = AuditLogger::new(log_path, true, true).unwrap();
        assert!(logger.enabled);
    }

    #[test]
    fn test_hash_pii_value() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path, true, true).unwrap();

        let hash1 = logger.hash_pii_value("Alice");
        let hash2 = logger.hash_pii_value("Alice");
        let hash3 = logger.hash_pii_value("Bob");

        // Same value should produce same hash
        assert_eq!(hash1, hash2);
        // Different value should produce different hash
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_log_document_never_contains_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger.log_document(&sample_outcome()).unwrap();

        assert!(log_path.exists());
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("doc-1.txt"));
        assert!(content.contains("PERSON"));
        assert!(!content.contains("Alice")); // Should NOT contain plaintext PII
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger.log_document(&sample_outcome()).unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        logger.log_document(&sample_outcome()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Document: doc-1.txt"));
        assert!(content.contains("Recall: 1.000"));
    }
}
