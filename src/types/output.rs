//! Output envelope for terminal and JSON display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::core::hallucination_risk;
use crate::types::{AnalysisReport, RiskLevel};

/// Analysis report plus provenance and risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
    /// File path, "stdin" or "text"
    pub source: String,
    /// SHA-256 of the analyzed content, lowercase hex
    pub content_sha256: String,
    pub hallucination_risk: f64,
    pub risk_level: RiskLevel,
    pub report: AnalysisReport,
}

impl ReportOutput {
    /// Wrap a report. Risk uses the trajectory average and volatility for
    /// conversations, and the overall balance with zero volatility otherwise.
    pub fn new(source: impl Into<String>, content: &str, report: AnalysisReport) -> Self {
        let risk = match &report {
            AnalysisReport::Conversation(conversation) => {
                let trajectory = &conversation.overall_metrics.trajectory;
                let balance = trajectory
                    .average_balance
                    .unwrap_or(conversation.overall_metrics.overall_balance);
                hallucination_risk(balance, trajectory.volatility)
            }
            AnalysisReport::RawContent(raw) => hallucination_risk(raw.overall_balance, 0.0),
        };

        Self {
            timestamp: Utc::now(),
            source: source.into(),
            content_sha256: content_digest(content),
            hallucination_risk: risk,
            risk_level: RiskLevel::from_score(risk),
            report,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let risk = match self.risk_level {
            RiskLevel::Low => self.risk_level.to_string().green(),
            RiskLevel::Medium => self.risk_level.to_string().yellow(),
            RiskLevel::High => self.risk_level.to_string().red(),
        };

        match &self.report {
            AnalysisReport::Conversation(report) => {
                let metrics = &report.overall_metrics;
                let phase = crate::core::detect_phase(metrics.overall_balance);
                format!(
                    "{} balance={:.3} | avg_turn={:.3} | {} | turns={} | trend={} | risk={:.3} ({}) | compliance={}",
                    "●".bold(),
                    metrics.overall_balance,
                    metrics.average_turn_balance,
                    phase.colored_label(),
                    report.total_turns,
                    metrics.trajectory.trend,
                    self.hallucination_risk,
                    risk,
                    report.compliance.compliance_level,
                )
            }
            AnalysisReport::RawContent(raw) => format!(
                "{} balance={:.3} | {} | technical={} | emotional={} | risk={:.3} ({}) | raw",
                "●".bold(),
                raw.overall_balance,
                raw.phase.colored_label(),
                raw.technical_count,
                raw.emotional_count,
                self.hallucination_risk,
                risk,
            ),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        match &self.report {
            AnalysisReport::Conversation(report) => {
                let metrics = &report.overall_metrics;
                format!(
                    "balance={:.3} | avg_turn={:.3} | phase={} | turns={} | trend={} | risk={:.3} | compliance={}",
                    metrics.overall_balance,
                    metrics.average_turn_balance,
                    crate::core::detect_phase(metrics.overall_balance),
                    report.total_turns,
                    metrics.trajectory.trend,
                    self.hallucination_risk,
                    report.compliance.compliance_level,
                )
            }
            AnalysisReport::RawContent(raw) => format!(
                "balance={:.3} | phase={} | technical={} | emotional={} | risk={:.3} | raw",
                raw.overall_balance,
                raw.phase,
                raw.technical_count,
                raw.emotional_count,
                self.hallucination_risk,
            ),
        }
    }
}

/// SHA-256 of `content` as lowercase hex
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}
