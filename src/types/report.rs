//! Report structures produced by the analyzers

use serde::{Deserialize, Serialize};
use crate::types::{CollaborationPhase, Speaker, TrajectoryReport, TranscriptFormat};
use crate::{COMPLIANCE_EXCELLENT, COMPLIANCE_FAIR, COMPLIANCE_GOOD};

// =============================================================================
// PATTERN DIAGNOSTICS
// =============================================================================

/// Matches of one rule in one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

/// Non-zero rule counts for the two balance vocabularies, rule order kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternBreakdown {
    pub technical: Vec<PatternCount>,
    pub emotional: Vec<PatternCount>,
}

/// Example matched text per pattern family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyExamples {
    pub technical: Vec<String>,
    pub emotional: Vec<String>,
    pub uncertainty: Vec<String>,
    pub memory: Vec<String>,
    pub attribution: Vec<String>,
}

impl FamilyExamples {
    /// Append up to `per_source` of each family from `other`, never growing a
    /// family past `cap`
    pub fn absorb(&mut self, other: &FamilyExamples, per_source: usize, cap: usize) {
        fn extend(into: &mut Vec<String>, from: &[String], per_source: usize, cap: usize) {
            let room = cap.saturating_sub(into.len());
            into.extend(from.iter().take(per_source.min(room)).cloned());
        }
        extend(&mut self.technical, &other.technical, per_source, cap);
        extend(&mut self.emotional, &other.emotional, per_source, cap);
        extend(&mut self.uncertainty, &other.uncertainty, per_source, cap);
        extend(&mut self.memory, &other.memory, per_source, cap);
        extend(&mut self.attribution, &other.attribution, per_source, cap);
    }
}

// =============================================================================
// SIMPLE MESSAGE ANALYSIS
// =============================================================================

/// Balance of one structured message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBalance {
    /// 1-based position
    pub turn: usize,
    /// Role as supplied
    pub role: String,
    pub balance: f64,
    pub technical: usize,
    pub emotional: usize,
}

/// Result of `BalanceAnalyzer::analyze_conversation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub total_messages: usize,
    pub turn_balances: Vec<MessageBalance>,
    pub technical_count: usize,
    pub emotional_count: usize,
    pub overall_balance: f64,
}

// =============================================================================
// CONVERSATION REPORT
// =============================================================================

/// Per-turn analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnAnalysis {
    pub turn_index: usize,
    pub speaker: Speaker,
    /// Length of the turn body in characters
    pub text_length: usize,
    pub balance: f64,
    pub phase: CollaborationPhase,
    pub technical_count: usize,
    pub emotional_count: usize,
    pub uncertainty_count: usize,
    pub memory_count: usize,
    pub attribution_count: usize,
    pub balance_awareness_count: usize,
    pub examples: FamilyExamples,
}

/// Totals across all turns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    /// From pooled technical/emotional counts
    pub overall_balance: f64,
    /// Mean of per-turn balances
    pub average_turn_balance: f64,
    pub total_technical_patterns: usize,
    pub total_emotional_patterns: usize,
    pub uncertainty_expressions: usize,
    pub memory_references: usize,
    pub attribution_corrections: usize,
    pub balance_awareness_references: usize,
    pub trajectory: TrajectoryReport,
}

/// Maximal contiguous run of turns in the same phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRun {
    pub phase: CollaborationPhase,
    pub start_turn_index: usize,
    /// Inclusive
    pub end_turn_index: usize,
    pub duration: usize,
    pub average_balance: f64,
}

/// Compliance tier from correction and uncertainty rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl ComplianceLevel {
    /// First satisfied rule wins; zero turns is Not Applicable
    pub fn from_totals(corrections: usize, uncertainty: usize, total_turns: usize) -> Self {
        if total_turns == 0 {
            return ComplianceLevel::NotApplicable;
        }

        let correction_rate = corrections as f64 / total_turns as f64;
        let uncertainty_rate = uncertainty as f64 / total_turns as f64;
        let exceeds = |(correction, uncertainty): (f64, f64)| {
            correction_rate > correction || uncertainty_rate > uncertainty
        };

        if exceeds(COMPLIANCE_EXCELLENT) {
            ComplianceLevel::Excellent
        } else if exceeds(COMPLIANCE_GOOD) {
            ComplianceLevel::Good
        } else if exceeds(COMPLIANCE_FAIR) {
            ComplianceLevel::Fair
        } else {
            ComplianceLevel::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::Excellent => "Excellent",
            ComplianceLevel::Good => "Good",
            ComplianceLevel::Fair => "Fair",
            ComplianceLevel::NeedsImprovement => "Needs Improvement",
            ComplianceLevel::NotApplicable => "Not Applicable",
        }
    }
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Attribution / uncertainty / memory rates per turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub attribution_score: f64,
    pub uncertainty_expression_rate: f64,
    pub memory_persistence_rate: f64,
    pub compliance_level: ComplianceLevel,
}

impl ComplianceSummary {
    pub fn from_totals(corrections: usize, uncertainty: usize, memory: usize, total_turns: usize) -> Self {
        let rate = |n: usize| {
            if total_turns == 0 {
                0.0
            } else {
                n as f64 / total_turns as f64
            }
        };

        Self {
            attribution_score: rate(corrections),
            uncertainty_expression_rate: rate(uncertainty),
            memory_persistence_rate: rate(memory),
            compliance_level: ComplianceLevel::from_totals(corrections, uncertainty, total_turns),
        }
    }
}

/// Full turn-by-turn report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationReport {
    pub total_turns: usize,
    /// Convention the turns were extracted with; None for structured messages
    pub format: Option<TranscriptFormat>,
    pub turn_analysis: Vec<TurnAnalysis>,
    pub overall_metrics: OverallMetrics,
    pub phase_progression: Vec<PhaseRun>,
    pub compliance: ComplianceSummary,
    pub examples: FamilyExamples,
}

/// Whole-document report used when no turns could be extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContentReport {
    pub raw_analysis: bool,
    pub overall_balance: f64,
    pub phase: CollaborationPhase,
    pub technical_count: usize,
    pub emotional_count: usize,
    /// Length of the document in characters
    pub content_length: usize,
}

/// Result of analyzing a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Conversation(ConversationReport),
    RawContent(RawContentReport),
}

impl AnalysisReport {
    /// Balance from pooled technical/emotional counts
    pub fn overall_balance(&self) -> f64 {
        match self {
            AnalysisReport::Conversation(report) => report.overall_metrics.overall_balance,
            AnalysisReport::RawContent(report) => report.overall_balance,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, AnalysisReport::RawContent(_))
    }

    pub fn as_conversation(&self) -> Option<&ConversationReport> {
        match self {
            AnalysisReport::Conversation(report) => Some(report),
            AnalysisReport::RawContent(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawContentReport> {
        match self {
            AnalysisReport::RawContent(report) => Some(report),
            AnalysisReport::Conversation(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
