//! Main pseudonymization pipeline
//!
//! This module provides the core [`Engine`] that composes span detection,
//! identity assignment, text rewriting, and recall evaluation for one
//! document at a time.
//!
//! # Architecture
//!
//! The engine coordinates four components:
//! - **Detector**: locates PII spans in free text (regex pattern table)
//! - **IdentityAssigner**: groups spans into identity classes
//! - **TextRewriter**: splices one synthetic value per class into the text
//! - **RecallEvaluator**: scores how completely the originals disappeared
//!
//! All intermediate state (identity map, replacement cache, offset drift)
//! is scoped to a single document; documents can be processed independently
//! with no coordination.

use crate::detector::{regex::RegexDetector, SpanDetector};
use crate::engine::{
    audit::AuditLogger,
    config::EngineConfig,
    identity::IdentityAssigner,
    recall::RecallEvaluator,
    rewriter::TextRewriter,
    span::{PiiCategory, SpanRecord},
    SyntheticValueGenerator,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Result of processing one document
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    /// Document identifier (base filename)
    pub document_id: String,

    /// Rewritten text (the original text in dry-run mode)
    pub anonymized_text: String,

    /// Detected spans with assigned identity IDs
    pub spans: Vec<SpanRecord>,

    /// Number of distinct identity classes
    pub identity_classes: usize,

    /// Fraction of original values no longer present in the output
    pub recall: f64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of processing
    pub timestamp: DateTime<Utc>,

    /// Span counts by category
    pub stats_by_category: HashMap<PiiCategory, usize>,
}

/// Main pseudonymization engine
///
/// # Thread Safety
///
/// The engine is thread-safe and can be shared across tasks using `Arc`;
/// the detector is internally wrapped in `Arc<dyn SpanDetector>` and every
/// per-document structure lives on the call stack.
pub struct Engine {
    config: EngineConfig,
    detector: Arc<dyn SpanDetector>,
    audit_logger: Option<AuditLogger>,
}

impl Engine {
    /// Create a new engine
    ///
    /// Initializes the engine with the provided configuration, creating:
    /// - the regex span detector (built-in or custom pattern library)
    /// - the audit logger (if enabled in configuration)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, the pattern
    /// library cannot be loaded, or audit logger initialization fails.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate().context("Invalid engine configuration")?;

        let detector: Arc<dyn SpanDetector> = if let Some(ref pattern_path) = config.pattern_library
        {
            let registry = crate::detector::patterns::PatternRegistry::from_file(pattern_path)?;
            Arc::new(RegexDetector::with_registry(registry))
        } else {
            Arc::new(RegexDetector::new()?)
        };

        Self::with_detector(config, detector)
    }

    /// Create a new engine with a caller-supplied detector
    ///
    /// The detector seam is where a model-based named-entity recognizer
    /// would plug in alongside the regex patterns.
    pub fn with_detector(config: EngineConfig, detector: Arc<dyn SpanDetector>) -> Result<Self> {
        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            detector,
            audit_logger,
        })
    }

    /// Process a single document
    ///
    /// # Behavior
    ///
    /// 1. Detects PII spans in the text
    /// 2. Assigns identity IDs (same entity, same ID)
    /// 3. If dry-run mode: returns the original text with detections
    /// 4. If normal mode: rewrites the text and logs to audit
    /// 5. Evaluates recall of the original values against the output
    ///
    /// # Errors
    ///
    /// Returns an error if detection fails, the detected spans violate the
    /// rewriting preconditions, or audit logging fails. A failure in one
    /// document never affects another; all state here is document-local.
    pub fn process_document(&self, document_id: &str, text: &str) -> Result<DocumentOutcome> {
        let start = Instant::now();

        let mut spans = self.detector.detect(text)?;
        tracing::debug!(
            document_id = %document_id,
            span_count = spans.len(),
            "Detected PII spans"
        );

        let mut assigner = match self.config.seed {
            Some(seed) => IdentityAssigner::with_seed(seed),
            None => IdentityAssigner::new(),
        };
        assigner.assign(&mut spans);

        let identity_classes = spans
            .iter()
            .filter_map(|s| s.identity_id)
            .collect::<HashSet<_>>()
            .len();
        let mut stats_by_category: HashMap<PiiCategory, usize> = HashMap::new();
        for span in &spans {
            *stats_by_category.entry(span.category).or_insert(0) += 1;
        }

        // Dry-run: report detections against the untouched text
        if self.config.dry_run {
            let recall = RecallEvaluator::new().evaluate(&spans, text);
            let processing_time = start.elapsed().as_millis() as u64;
            return Ok(DocumentOutcome {
                document_id: document_id.to_string(),
                anonymized_text: text.to_string(),
                spans,
                identity_classes,
                recall,
                processing_time_ms: processing_time,
                timestamp: Utc::now(),
                stats_by_category,
            });
        }

        let generator = match self.config.seed {
            // Offset the seed so ID allocation and value generation stay
            // independent random streams even under one configured seed.
            Some(seed) => SyntheticValueGenerator::with_seed(seed.wrapping_add(1)),
            None => SyntheticValueGenerator::new(),
        };
        let mut rewriter = TextRewriter::new(generator);
        let anonymized_text = rewriter
            .rewrite(text, &spans)
            .with_context(|| format!("Failed to rewrite document {document_id}"))?;

        let recall = RecallEvaluator::new().evaluate(&spans, &anonymized_text);
        let processing_time = start.elapsed().as_millis() as u64;

        let outcome = DocumentOutcome {
            document_id: document_id.to_string(),
            anonymized_text,
            spans,
            identity_classes,
            recall,
            processing_time_ms: processing_time,
            timestamp: Utc::now(),
            stats_by_category,
        };

        if let Some(ref logger) = self.audit_logger {
            logger.log_document(&outcome)?;
        }

        Ok(outcome)
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
