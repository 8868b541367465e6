//! Analyzers: single texts, structured messages, full transcripts
//!
//! `BalanceAnalyzer` scores texts and `{role, content}` messages.
//! `ConversationAnalyzer` runs the full pipeline: turn extraction, per-turn
//! family counts, pooled and averaged balance, trajectory, phase progression
//! and compliance. Transcripts without speaker markers fall back to a
//! whole-document report.

use std::path::Path;
use tracing::debug;
use crate::config::AnalyzerConfig;
use crate::core::{
    calculate_balance, calculate_trajectory, detect_phase, phase_progression,
    PatternLibrary, TurnExtractor,
};
use crate::error::{AnalyzerError, Result};
use crate::types::{
    AnalysisReport, ComplianceSummary, ConversationReport, FamilyExamples, Message,
    MessageBalance, MessageSummary, OverallMetrics, PatternBreakdown, RawContentReport,
    Speaker, TranscriptFormat, Turn, TurnAnalysis,
};
use crate::NEUTRAL_BALANCE;

// =============================================================================
// BALANCE ANALYZER
// =============================================================================

/// Technical/emotional balance of texts and message lists
#[derive(Debug, Clone, Default)]
pub struct BalanceAnalyzer {
    library: PatternLibrary,
}

impl BalanceAnalyzer {
    /// Analyzer over the built-in vocabularies
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: PatternLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// (technical, emotional) match counts
    pub fn counts(&self, text: &str) -> (usize, usize) {
        (self.library.technical.count(text), self.library.emotional.count(text))
    }

    /// Balance score for one text
    pub fn analyze_text(&self, text: &str) -> f64 {
        let (technical, emotional) = self.counts(text);
        calculate_balance(technical, emotional)
    }

    /// Per-message balances plus the pooled overall balance.
    /// Roles are reported as supplied.
    pub fn analyze_conversation(&self, messages: &[Message]) -> MessageSummary {
        let mut turn_balances = Vec::with_capacity(messages.len());
        let mut technical_count = 0;
        let mut emotional_count = 0;

        for (i, message) in messages.iter().enumerate() {
            let (technical, emotional) = self.counts(&message.content);
            turn_balances.push(MessageBalance {
                turn: i + 1,
                role: message.role.clone(),
                balance: calculate_balance(technical, emotional),
                technical,
                emotional,
            });
            technical_count += technical;
            emotional_count += emotional;
        }

        MessageSummary {
            total_messages: messages.len(),
            turn_balances,
            technical_count,
            emotional_count,
            overall_balance: calculate_balance(technical_count, emotional_count),
        }
    }

    /// Which technical and emotional rules matched, and how often
    pub fn pattern_breakdown(&self, text: &str) -> PatternBreakdown {
        PatternBreakdown {
            technical: self.library.technical.breakdown(text),
            emotional: self.library.emotional.breakdown(text),
        }
    }
}

// =============================================================================
// CONVERSATION ANALYZER
// =============================================================================

/// Full transcript analysis
#[derive(Debug, Clone, Default)]
pub struct ConversationAnalyzer {
    library: PatternLibrary,
    extractor: TurnExtractor,
    config: AnalyzerConfig,
}

impl ConversationAnalyzer {
    /// Analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with extra patterns and example caps from `config`
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            library: PatternLibrary::with_extras(&config.extra_patterns),
            extractor: TurnExtractor::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Analyze a raw transcript. Falls back to whole-document analysis when
    /// no turns can be extracted.
    pub fn analyze(&self, content: &str) -> AnalysisReport {
        let extraction = self.extractor.extract(content);
        if extraction.turns.is_empty() {
            debug!(format = ?extraction.format, "no turns extracted, analyzing raw content");
            return AnalysisReport::RawContent(self.analyze_raw(content));
        }
        AnalysisReport::Conversation(self.analyze_turns(&extraction.turns, extraction.format))
    }

    /// Read a UTF-8 transcript file and analyze it
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.analyze(&content))
    }

    /// Full report for structured messages; roles are normalized like
    /// extracted speaker labels
    pub fn analyze_messages(&self, messages: &[Message]) -> ConversationReport {
        let turns: Vec<Turn> = messages
            .iter()
            .enumerate()
            .map(|(i, m)| Turn::new(Speaker::from_label(&m.role), m.content.clone(), i))
            .collect();
        self.analyze_turns(&turns, None)
    }

    /// Full report for an ordered turn sequence
    pub fn analyze_turns(&self, turns: &[Turn], format: Option<TranscriptFormat>) -> ConversationReport {
        let mut turn_analysis = Vec::with_capacity(turns.len());
        let mut examples = FamilyExamples::default();

        let mut total_technical = 0;
        let mut total_emotional = 0;
        let mut total_uncertainty = 0;
        let mut total_memory = 0;
        let mut total_attribution = 0;
        let mut total_awareness = 0;

        for (i, turn) in turns.iter().enumerate() {
            let analysis = self.analyze_turn(turn, i);

            total_technical += analysis.technical_count;
            total_emotional += analysis.emotional_count;
            total_uncertainty += analysis.uncertainty_count;
            total_memory += analysis.memory_count;
            total_attribution += analysis.attribution_count;
            total_awareness += analysis.balance_awareness_count;

            examples.absorb(
                &analysis.examples,
                self.config.report_examples_per_turn,
                self.config.max_report_examples,
            );
            turn_analysis.push(analysis);
        }

        let balances: Vec<f64> = turn_analysis.iter().map(|t| t.balance).collect();
        let average_turn_balance = if balances.is_empty() {
            NEUTRAL_BALANCE
        } else {
            balances.iter().sum::<f64>() / balances.len() as f64
        };

        let overall_metrics = OverallMetrics {
            overall_balance: calculate_balance(total_technical, total_emotional),
            average_turn_balance,
            total_technical_patterns: total_technical,
            total_emotional_patterns: total_emotional,
            uncertainty_expressions: total_uncertainty,
            memory_references: total_memory,
            attribution_corrections: total_attribution,
            balance_awareness_references: total_awareness,
            trajectory: calculate_trajectory(&balances),
        };

        ConversationReport {
            total_turns: turns.len(),
            format,
            turn_analysis,
            overall_metrics,
            phase_progression: phase_progression(&balances),
            compliance: ComplianceSummary::from_totals(
                total_attribution,
                total_uncertainty,
                total_memory,
                turns.len(),
            ),
            examples,
        }
    }

    /// Counts, balance, phase and examples for one turn
    pub fn analyze_turn(&self, turn: &Turn, index: usize) -> TurnAnalysis {
        let text = turn.text.as_str();
        let library = &self.library;
        let limits = &self.config.example_limits;

        let technical_count = library.technical.count(text);
        let emotional_count = library.emotional.count(text);
        let balance = calculate_balance(technical_count, emotional_count);

        TurnAnalysis {
            turn_index: index,
            speaker: turn.speaker.clone(),
            text_length: text.chars().count(),
            balance,
            phase: detect_phase(balance),
            technical_count,
            emotional_count,
            uncertainty_count: library.uncertainty.count(text),
            memory_count: library.memory.count(text),
            attribution_count: library.attribution.count(text),
            balance_awareness_count: library.balance_awareness.count(text),
            examples: FamilyExamples {
                technical: library.technical.examples(text, limits.technical),
                emotional: library.emotional.examples(text, limits.emotional),
                uncertainty: library.uncertainty.examples(text, limits.uncertainty),
                memory: library.memory.examples(text, limits.memory),
                attribution: library.attribution.examples(text, limits.attribution),
            },
        }
    }

    /// Whole-document balance and phase, no turn detail
    pub fn analyze_raw(&self, content: &str) -> RawContentReport {
        let technical_count = self.library.technical.count(content);
        let emotional_count = self.library.emotional.count(content);
        let balance = calculate_balance(technical_count, emotional_count);

        RawContentReport {
            raw_analysis: true,
            overall_balance: balance,
            phase: detect_phase(balance),
            technical_count,
            emotional_count,
            content_length: content.chars().count(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
