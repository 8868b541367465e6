//! Trajectory structures

use serde::{Deserialize, Serialize};
use crate::types::CollaborationPhase;
use crate::{RISK_LEVEL_LOW, RISK_LEVEL_MEDIUM};

/// Direction of a balance sequence, start third vs. end third
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// No balances at all
    Neutral,
    /// Exactly one balance
    InsufficientData,
    /// End moved toward technical by more than the threshold
    TechnicalShift,
    /// End moved toward emotional by more than the threshold
    EmotionalShift,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Neutral => "neutral",
            Trend::InsufficientData => "insufficient_data",
            Trend::TechnicalShift => "technical_shift",
            Trend::EmotionalShift => "emotional_shift",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of an ordered balance sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    pub trend: Trend,
    /// Mean absolute difference between consecutive balances
    pub volatility: f64,
    /// max(0, 1 - volatility * 10); 0.0 for an empty sequence
    pub stability_score: f64,
    /// Distinct named phases, first occurrence order
    pub phases_detected: Vec<CollaborationPhase>,
    pub start_balance: Option<f64>,
    pub end_balance: Option<f64>,
    pub average_balance: Option<f64>,
}

impl TrajectoryReport {
    /// Degenerate report for an empty sequence
    pub fn empty() -> Self {
        Self {
            trend: Trend::Neutral,
            volatility: 0.0,
            stability_score: 0.0,
            phases_detected: Vec::new(),
            start_balance: None,
            end_balance: None,
            average_balance: None,
        }
    }
}

/// Bucketed hallucination risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Low < 0.3 <= Medium < 0.7 <= High
    pub fn from_score(score: f64) -> Self {
        if score < RISK_LEVEL_LOW {
            RiskLevel::Low
        } else if score < RISK_LEVEL_MEDIUM {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{}", name)
    }
}
