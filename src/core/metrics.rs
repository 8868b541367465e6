//! Balance, phase and risk arithmetic
//!
//! Pure functions, total over their inputs:
//! - balance = technical / (technical + emotional), 0.5 when both are zero
//! - phase = first closed range containing the balance (Foundation,
//!   Development, Mastery), else Unknown
//! - risk = mean of deviation, volatility and extreme-imbalance terms

use crate::types::CollaborationPhase;
use crate::{
    DEVELOPMENT_RANGE, FOUNDATION_RANGE, MASTERY_RANGE, NEUTRAL_BALANCE,
    RISK_EXTREME_HIGH, RISK_EXTREME_LOW, RISK_EXTREME_PENALTY, RISK_IDEAL_BALANCE,
};

/// Balance score in [0, 1]: 1.0 purely technical, 0.0 purely emotional
pub fn calculate_balance(technical_count: usize, emotional_count: usize) -> f64 {
    // summed as f64 so huge counts cannot overflow
    let total = technical_count as f64 + emotional_count as f64;
    if total == 0.0 {
        return NEUTRAL_BALANCE;
    }
    technical_count as f64 / total
}

/// Phase for a balance score.
///
/// Ranges are checked Foundation → Development → Mastery. Development and
/// Mastery overlap on [0.74, 0.81]; values there are Development.
pub fn detect_phase(balance: f64) -> CollaborationPhase {
    let within = |(low, high): (f64, f64)| low <= balance && balance <= high;

    if within(FOUNDATION_RANGE) {
        CollaborationPhase::Foundation
    } else if within(DEVELOPMENT_RANGE) {
        CollaborationPhase::Development
    } else if within(MASTERY_RANGE) {
        CollaborationPhase::Mastery
    } else {
        CollaborationPhase::Unknown
    }
}

/// Heuristic hallucination risk in [0, 1], lower is better
pub fn hallucination_risk(balance: f64, volatility: f64) -> f64 {
    let balance_deviation = (balance - RISK_IDEAL_BALANCE).abs();
    let volatility_factor = (volatility * 2.0).min(1.0);
    let extreme_factor = if balance < RISK_EXTREME_LOW || balance > RISK_EXTREME_HIGH {
        RISK_EXTREME_PENALTY
    } else {
        0.0
    };

    let risk = (balance_deviation + volatility_factor + extreme_factor) / 3.0;
    risk.max(0.0).min(1.0)
}

// =============================================================================
// TESTS
// =============================================================================
