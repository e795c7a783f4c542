//! Pattern library for PII span detection

use crate::engine::span::PiiCategory;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// PII category label
    pub category: String,
}

/// Compiled pattern with its category
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Pattern registry for PII span detection
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
    patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns = Vec::new();
        let mut patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>> = HashMap::new();

        // Deterministic compile order regardless of TOML map iteration
        let mut definitions: Vec<(&String, &PatternDefinition)> = library.patterns.iter().collect();
        definitions.sort_by(|a, b| a.0.cmp(b.0));

        for (name, def) in definitions {
            let category = PiiCategory::from_label(&def.category);
            if category == PiiCategory::Other {
                tracing::warn!(
                    pattern = %name,
                    category = %def.category,
                    "Pattern category has no shaped generator; matches will be masked"
                );
            }

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                let compiled = CompiledPattern { regex, category };

                patterns.push(compiled.clone());
                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(compiled);
            }
        }

        Ok(Self {
            patterns,
            patterns_by_category,
        })
    }

    /// Create a registry with the built-in default patterns
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: PiiCategory) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(!registry.all_patterns().is_empty());
    }

    #[test]
    fn test_ssn_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry
            .patterns_for_category(PiiCategory::SocialSecurityNumber)
            .unwrap();
        assert!(!patterns.is_empty());

        let pattern = &patterns[0];
        assert!(pattern.regex.is_match("123-45-6789"));
        assert!(!pattern.regex.is_match("12-345-6789"));
    }

    #[test]
    fn test_car_plate_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry
            .patterns_for_category(PiiCategory::CarPlate)
            .unwrap();

        let spaced = "parked as ABC 1234 overnight";
        let dashed = "parked as XY-987 overnight";
        assert!(patterns.iter().any(|p| p.regex.is_match(spaced)));
        assert!(patterns.iter().any(|p| p.regex.is_match(dashed)));
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let toml = r#"
            [patterns.custom]
            category = "LOYALTY_CARD"
            patterns = ['\bLC-\d{6}\b']
        "#;
        let registry = PatternRegistry::from_toml(toml).unwrap();
        assert_eq!(registry.all_patterns().len(), 1);
        assert_eq!(registry.all_patterns()[0].category, PiiCategory::Other);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
            [patterns.broken]
            category = "PASSPORT"
            patterns = ['[unclosed']
        "#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }
}
