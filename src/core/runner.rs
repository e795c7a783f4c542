//! Run coordinator
//!
//! Drives one run over an input directory: discover documents, push each
//! through the pseudonymization engine, write the anonymized output, and
//! collect the run report. One malformed document never aborts the run;
//! its failure is logged and reported as a warning.

use crate::config::TextveilConfig;
use crate::core::documents::{discover_documents, read_document, write_document};
use crate::engine::{Engine, RunReport};
use anyhow::{Context, Result};
use tokio::sync::watch;

/// Coordinates one pseudonymization run over a directory of documents
pub struct RunCoordinator {
    config: TextveilConfig,
    engine: Engine,
}

impl RunCoordinator {
    /// Create a coordinator from a validated configuration
    pub fn new(config: TextveilConfig) -> Result<Self> {
        let engine =
            Engine::new(config.engine.clone()).context("Failed to create pseudonymization engine")?;
        Ok(Self { config, engine })
    }

    /// Process every document in the configured input directory
    ///
    /// Honors the shutdown signal between documents: the in-flight document
    /// is finished, the rest are skipped and reported.
    pub async fn execute(&self, shutdown_signal: watch::Receiver<bool>) -> Result<RunReport> {
        let files = discover_documents(&self.config.input.dir, &self.config.input.extension)
            .await
            .context("Document discovery failed")?;

        let mut report = RunReport::new();

        if files.is_empty() {
            tracing::warn!(
                dir = %self.config.input.dir.display(),
                extension = %self.config.input.extension,
                "No documents found in input directory"
            );
            return Ok(report);
        }

        tracing::info!(
            count = files.len(),
            dry_run = self.engine.is_dry_run(),
            "Starting pseudonymization run"
        );

        for path in files {
            if *shutdown_signal.borrow() {
                tracing::info!("Shutdown requested, skipping remaining documents");
                report.add_warning(format!("Run interrupted before {}", path.display()));
                break;
            }

            let document_id = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            let text = match read_document(&path).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, document_id = %document_id, "Failed to read document");
                    report.add_warning(format!("Failed to read {document_id}: {e}"));
                    continue;
                }
            };

            let outcome = match self.engine.process_document(&document_id, &text) {
                Ok(outcome) => outcome,
                Err(e) => {
                    // Isolate the failure; other documents still get processed
                    tracing::error!(error = ?e, document_id = %document_id, "Failed to process document");
                    report.add_warning(format!("Failed to process {document_id}: {e}"));
                    continue;
                }
            };

            if !self.engine.is_dry_run() {
                if let Err(e) =
                    write_document(&self.config.output.dir, &path, &outcome.anonymized_text).await
                {
                    tracing::error!(error = %e, document_id = %document_id, "Failed to write output");
                    report.add_warning(format!("Failed to write output for {document_id}: {e}"));
                    continue;
                }
            }

            tracing::info!(
                document_id = %document_id,
                spans = outcome.spans.len(),
                identity_classes = outcome.identity_classes,
                recall = outcome.recall,
                "Processed document"
            );
            report.add_document(&outcome);
        }

        Ok(report)
    }
}
