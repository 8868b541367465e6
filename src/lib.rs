//! Welsh-Winters Balance: technical vs. emotional language scoring
//!
//! Pipeline: transcript → turn extractor → pattern counter → balance →
//! phase / trajectory → conversation report

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{AnalyzerError, Result};

// =============================================================================
// BALANCE
// =============================================================================

/// Balance reported when no technical or emotional pattern matched
pub const NEUTRAL_BALANCE: f64 = 0.5;

// =============================================================================
// PHASE RANGES - closed intervals, checked in this order
// =============================================================================

/// Foundation phase: [0.54, 0.58]
pub const FOUNDATION_RANGE: (f64, f64) = (0.54, 0.58);

/// Development phase: [0.74, 0.86]
pub const DEVELOPMENT_RANGE: (f64, f64) = (0.74, 0.86);

/// Mastery phase: [0.70, 0.81]
/// Overlaps Development on [0.74, 0.81]; Development is checked first and wins.
pub const MASTERY_RANGE: (f64, f64) = (0.70, 0.81);

// =============================================================================
// TRAJECTORY
// =============================================================================

/// Difference between end-third and start-third means that counts as a shift
pub const TREND_SHIFT_THRESHOLD: f64 = 0.1;

/// stability = max(0, 1 - volatility * STABILITY_VOLATILITY_SCALE)
pub const STABILITY_VOLATILITY_SCALE: f64 = 10.0;

// =============================================================================
// HALLUCINATION RISK
// =============================================================================

/// Empirically chosen "ideal" balance
pub const RISK_IDEAL_BALANCE: f64 = 0.6;

/// Below this balance the extreme-imbalance penalty applies
pub const RISK_EXTREME_LOW: f64 = 0.2;

/// Above this balance the extreme-imbalance penalty applies
pub const RISK_EXTREME_HIGH: f64 = 0.9;

/// Flat penalty for extreme imbalance
pub const RISK_EXTREME_PENALTY: f64 = 0.5;

/// Risk below this is "Low"
pub const RISK_LEVEL_LOW: f64 = 0.3;

/// Risk below this (and not Low) is "Medium"
pub const RISK_LEVEL_MEDIUM: f64 = 0.7;

// =============================================================================
// COMPLIANCE THRESHOLDS - (correction rate, uncertainty rate), first hit wins
// =============================================================================

pub const COMPLIANCE_EXCELLENT: (f64, f64) = (0.10, 0.20);
pub const COMPLIANCE_GOOD: (f64, f64) = (0.05, 0.10);
pub const COMPLIANCE_FAIR: (f64, f64) = (0.02, 0.05);

// =============================================================================
// DIAGNOSTIC EXAMPLE CAPS
// =============================================================================

/// Per-turn example caps per pattern family
pub const TECHNICAL_EXAMPLES_PER_TURN: usize = 2;
pub const EMOTIONAL_EXAMPLES_PER_TURN: usize = 2;
pub const UNCERTAINTY_EXAMPLES_PER_TURN: usize = 1;
pub const MEMORY_EXAMPLES_PER_TURN: usize = 1;
pub const ATTRIBUTION_EXAMPLES_PER_TURN: usize = 1;

/// How many of each turn's examples flow into the conversation report
pub const REPORT_EXAMPLES_PER_TURN: usize = 2;

/// Upper bound on aggregated examples per family in a conversation report
pub const MAX_REPORT_EXAMPLES: usize = 10;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
