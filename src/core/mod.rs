//! Core modules for Welsh-Winters balance analysis

pub mod vocabulary;
pub mod patterns;
pub mod metrics;
pub mod trajectory;
pub mod extractor;
pub mod analyzer;

pub use patterns::{MatchRule, RuleSet, PatternLibrary, count_patterns, pattern_breakdown};
pub use metrics::{calculate_balance, detect_phase, hallucination_risk};
pub use trajectory::{calculate_trajectory, phase_progression};
pub use extractor::{TurnExtractor, Extraction, extract_turns};
pub use analyzer::{BalanceAnalyzer, ConversationAnalyzer};
