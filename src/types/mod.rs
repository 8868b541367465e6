//! Core types for Welsh-Winters analysis

mod phase;
mod turn;
mod trajectory;
mod report;
mod output;

pub use phase::CollaborationPhase;
pub use turn::{Speaker, Turn, Message, TranscriptFormat};
pub use trajectory::{Trend, TrajectoryReport, RiskLevel};
pub use report::{
    PatternCount, PatternBreakdown, FamilyExamples, MessageBalance, MessageSummary,
    TurnAnalysis, OverallMetrics, PhaseRun, ComplianceLevel, ComplianceSummary,
    ConversationReport, RawContentReport, AnalysisReport,
};
pub use output::{ReportOutput, content_digest};
