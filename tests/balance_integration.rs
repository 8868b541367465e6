//! Integration tests for balance, phase and trajectory
//!
//! Tests the scoring path: counts → balance → phase → trajectory → risk

use welsh_winters::core::{
    calculate_balance, calculate_trajectory, detect_phase, hallucination_risk, phase_progression,
    BalanceAnalyzer,
};
use welsh_winters::types::{CollaborationPhase, RiskLevel, Trend};

#[test]
fn test_balance_formula() {
    assert_eq!(calculate_balance(0, 0), 0.5);
    assert_eq!(calculate_balance(3, 1), 0.75);
    assert_eq!(calculate_balance(0, 4), 0.0);
    assert_eq!(calculate_balance(4, 0), 1.0);
}

#[test]
fn test_phase_ranges_inclusive() {
    assert_eq!(detect_phase(0.54), CollaborationPhase::Foundation);
    assert_eq!(detect_phase(0.58), CollaborationPhase::Foundation);
    assert_eq!(detect_phase(0.70), CollaborationPhase::Mastery);
    assert_eq!(detect_phase(0.74), CollaborationPhase::Development);
    assert_eq!(detect_phase(0.86), CollaborationPhase::Development);
    assert_eq!(detect_phase(0.6), CollaborationPhase::Unknown);
    assert_eq!(detect_phase(0.87), CollaborationPhase::Unknown);
}

#[test]
fn test_overlap_resolves_to_development() {
    assert_eq!(detect_phase(0.75), CollaborationPhase::Development);
    assert_eq!(detect_phase(0.81), CollaborationPhase::Development);
}

#[test]
fn test_text_to_phase() {
    let analyzer = BalanceAnalyzer::new();
    // 3 technical (API, JSON, database), 1 emotional (thanks) → 0.75
    let balance = analyzer.analyze_text("Thanks, the API returns JSON from the database");
    assert_eq!(balance, 0.75);
    assert_eq!(detect_phase(balance), CollaborationPhase::Development);
}

#[test]
fn test_trajectory_of_growing_series() {
    let balances = [0.3, 0.4, 0.5, 0.6, 0.75, 0.8];
    let report = calculate_trajectory(&balances);

    assert_eq!(report.trend, Trend::TechnicalShift);
    assert_eq!(report.start_balance, Some(0.3));
    assert_eq!(report.end_balance, Some(0.8));
    assert_eq!(
        report.phases_detected,
        vec![CollaborationPhase::Development]
    );

    let runs = phase_progression(&balances);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].phase, CollaborationPhase::Unknown);
    assert_eq!(runs[0].duration, 4);
    assert_eq!(runs[1].phase, CollaborationPhase::Development);
    assert_eq!(runs[1].start_turn_index, 4);
}

#[test]
fn test_progression_durations_cover_sequence() {
    let balances = [0.56, 0.1, 0.1, 0.8, 0.72, 0.72, 0.56];
    let runs = phase_progression(&balances);
    let total: usize = runs.iter().map(|r| r.duration).sum();
    assert_eq!(total, balances.len());
    for pair in runs.windows(2) {
        assert_eq!(pair[0].end_turn_index + 1, pair[1].start_turn_index);
        assert_ne!(pair[0].phase, pair[1].phase);
    }
}

#[test]
fn test_risk_levels() {
    // ideal balance, no volatility
    let low = hallucination_risk(0.6, 0.0);
    assert_eq!(low, 0.0);
    assert_eq!(RiskLevel::from_score(low), RiskLevel::Low);

    // (0.6 + 1.0 + 0.5) / 3: the worst case the formula can reach
    let worst = hallucination_risk(0.0, 0.8);
    assert!((worst - 0.7).abs() < 1e-9);

    let medium = hallucination_risk(0.1, 0.3);
    assert_eq!(RiskLevel::from_score(medium), RiskLevel::Medium);
}
