//! Run reporting for pseudonymization
//!
//! Collects per-document outcomes into a run summary: span counts by
//! category, identity-class counts, recall scores, and processing times.

use crate::engine::pipeline::DocumentOutcome;
use crate::engine::span::PiiCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

/// Summary of one processed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document identifier (base filename)
    pub document_id: String,

    /// Number of detected spans
    pub span_count: usize,

    /// Number of distinct identity classes
    pub identity_classes: usize,

    /// Recall score for this document
    pub recall: f64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per document (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Documents with PII detected
    pub documents_with_pii: usize,

    /// Documents without PII
    pub documents_without_pii: usize,
}

/// Run report with detection and recall statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Total documents processed
    pub total_documents: usize,

    /// Total PII spans detected
    pub total_spans: usize,

    /// Span detections by category
    pub detections_by_category: HashMap<PiiCategory, usize>,

    /// Per-document summaries
    pub documents: Vec<DocumentSummary>,

    /// Warnings (documents skipped, validation failures)
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

impl RunReport {
    /// Create a new empty run report
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            total_spans: 0,
            detections_by_category: HashMap::new(),
            documents: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats {
                avg_processing_time_ms: 0,
                total_processing_time_ms: 0,
                documents_with_pii: 0,
                documents_without_pii: 0,
            },
        }
    }

    /// Add results from a processed document
    pub fn add_document(&mut self, outcome: &DocumentOutcome) {
        self.total_documents += 1;
        self.stats.total_processing_time_ms += outcome.processing_time_ms;

        if outcome.spans.is_empty() {
            self.stats.documents_without_pii += 1;
        } else {
            self.stats.documents_with_pii += 1;
            self.total_spans += outcome.spans.len();

            for (category, count) in &outcome.stats_by_category {
                *self.detections_by_category.entry(*category).or_insert(0) += count;
            }
        }

        self.documents.push(DocumentSummary {
            document_id: outcome.document_id.clone(),
            span_count: outcome.spans.len(),
            identity_classes: outcome.identity_classes,
            recall: outcome.recall,
            processing_time_ms: outcome.processing_time_ms,
        });

        if self.total_documents > 0 {
            self.stats.avg_processing_time_ms =
                self.stats.total_processing_time_ms / self.total_documents as u64;
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Average recall over all processed documents (1.0 when none)
    pub fn average_recall(&self) -> f64 {
        if self.documents.is_empty() {
            return 1.0;
        }
        let total: f64 = self.documents.iter().map(|d| d.recall).sum();
        total / self.documents.len() as f64
    }

    /// Render a human-readable summary for the console
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Pseudonymization Summary");
        let _ = writeln!(out, "========================");
        let _ = writeln!(out, "Documents processed: {}", self.total_documents);
        let _ = writeln!(out, "Spans detected:      {}", self.total_spans);
        let _ = writeln!(out, "Average recall:      {:.3}", self.average_recall());
        let _ = writeln!(
            out,
            "Total time:          {}ms",
            self.stats.total_processing_time_ms
        );

        if !self.detections_by_category.is_empty() {
            let _ = writeln!(out, "\nDetections by category:");
            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by_key(|(category, _)| category.label());
            for (category, count) in categories {
                let _ = writeln!(out, "  {:<24} {}", category.label(), count);
            }
        }

        if !self.documents.is_empty() {
            let _ = writeln!(out, "\nPer-document recall:");
            for doc in &self.documents {
                let _ = writeln!(
                    out,
                    "  {:<32} recall {:.3} ({} spans, {} classes)",
                    doc.document_id, doc.recall, doc.span_count, doc.identity_classes
                );
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\nWarnings:");
            for warning in &self.warnings {
                let _ = writeln!(out, "  - {warning}");
            }
        }

        out
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
