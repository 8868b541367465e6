//! Runtime configuration for the analyzers
//!
//! Loaded from JSON; every field is optional and falls back to the
//! crate-level defaults.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{AnalyzerError, Result};
use crate::{
    ATTRIBUTION_EXAMPLES_PER_TURN, EMOTIONAL_EXAMPLES_PER_TURN, MAX_REPORT_EXAMPLES,
    MEMORY_EXAMPLES_PER_TURN, REPORT_EXAMPLES_PER_TURN, TECHNICAL_EXAMPLES_PER_TURN,
    UNCERTAINTY_EXAMPLES_PER_TURN,
};

/// Analyzer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Example matches kept per turn, per family
    pub example_limits: ExampleLimits,
    /// How many of each turn's examples go into the report-level lists
    pub report_examples_per_turn: usize,
    /// Cap on each report-level example list
    pub max_report_examples: usize,
    /// Patterns appended to the built-in vocabularies
    pub extra_patterns: ExtraPatterns,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            example_limits: ExampleLimits::default(),
            report_examples_per_turn: REPORT_EXAMPLES_PER_TURN,
            max_report_examples: MAX_REPORT_EXAMPLES,
            extra_patterns: ExtraPatterns::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| AnalyzerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Per-turn example caps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleLimits {
    pub technical: usize,
    pub emotional: usize,
    pub uncertainty: usize,
    pub memory: usize,
    pub attribution: usize,
}

impl Default for ExampleLimits {
    fn default() -> Self {
        Self {
            technical: TECHNICAL_EXAMPLES_PER_TURN,
            emotional: EMOTIONAL_EXAMPLES_PER_TURN,
            uncertainty: UNCERTAINTY_EXAMPLES_PER_TURN,
            memory: MEMORY_EXAMPLES_PER_TURN,
            attribution: ATTRIBUTION_EXAMPLES_PER_TURN,
        }
    }
}

/// Extra regex patterns per family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPatterns {
    pub technical: Vec<String>,
    pub emotional: Vec<String>,
    pub uncertainty: Vec<String>,
    pub memory: Vec<String>,
    pub attribution: Vec<String>,
    pub balance_awareness: Vec<String>,
}

impl ExtraPatterns {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty()
            && self.emotional.is_empty()
            && self.uncertainty.is_empty()
            && self.memory.is_empty()
            && self.attribution.is_empty()
            && self.balance_awareness.is_empty()
    }
}
