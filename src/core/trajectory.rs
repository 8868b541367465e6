//! Trajectory analysis over an ordered balance sequence
//!
//! Trend compares the mean of the first third with the mean of the last
//! third (same floor-divided size from each end; any middle remainder is in
//! neither). Volatility is the mean absolute step between consecutive values.

use crate::core::detect_phase;
use crate::types::{CollaborationPhase, PhaseRun, TrajectoryReport, Trend};
use crate::{STABILITY_VOLATILITY_SCALE, TREND_SHIFT_THRESHOLD};

/// Trend, volatility, stability and phases visited for `balances`
pub fn calculate_trajectory(balances: &[f64]) -> TrajectoryReport {
    if balances.is_empty() {
        return TrajectoryReport::empty();
    }

    let volatility = volatility(balances);

    let mut phases_detected: Vec<CollaborationPhase> = Vec::new();
    for &balance in balances {
        let phase = detect_phase(balance);
        if phase.is_known() && !phases_detected.contains(&phase) {
            phases_detected.push(phase);
        }
    }

    TrajectoryReport {
        trend: trend(balances),
        volatility,
        stability_score: (1.0 - volatility * STABILITY_VOLATILITY_SCALE).max(0.0),
        phases_detected,
        start_balance: balances.first().copied(),
        end_balance: balances.last().copied(),
        average_balance: Some(mean(balances)),
    }
}

/// Start-third vs. end-third comparison
fn trend(balances: &[f64]) -> Trend {
    if balances.len() < 2 {
        return Trend::InsufficientData;
    }

    // Two elements floor to an empty third; compare first vs. last instead.
    let third = (balances.len() / 3).max(1);
    let start_avg = mean(&balances[..third]);
    let end_avg = mean(&balances[balances.len() - third..]);

    if end_avg > start_avg + TREND_SHIFT_THRESHOLD {
        Trend::TechnicalShift
    } else if end_avg < start_avg - TREND_SHIFT_THRESHOLD {
        Trend::EmotionalShift
    } else {
        Trend::Stable
    }
}

/// Mean absolute difference between consecutive balances, 0.0 below two
fn volatility(balances: &[f64]) -> f64 {
    if balances.len() < 2 {
        return 0.0;
    }
    let total: f64 = balances.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    total / (balances.len() - 1) as f64
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// One record per maximal run of consecutive balances in the same phase.
/// Unknown runs are included.
pub fn phase_progression(balances: &[f64]) -> Vec<PhaseRun> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < balances.len() {
        let phase = detect_phase(balances[start]);
        let mut end = start;
        while end + 1 < balances.len() && detect_phase(balances[end + 1]) == phase {
            end += 1;
        }

        let run = &balances[start..=end];
        runs.push(PhaseRun {
            phase,
            start_turn_index: start,
            end_turn_index: end,
            duration: run.len(),
            average_balance: mean(run),
        });
        start = end + 1;
    }

    runs
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let report = calculate_trajectory(&[]);
        assert_eq!(report.trend, Trend::Neutral);
        assert_eq!(report.volatility, 0.0);
        assert_eq!(report.stability_score, 0.0);
        assert!(report.phases_detected.is_empty());
        assert_eq!(report.start_balance, None);
        assert_eq!(report.end_balance, None);
        assert_eq!(report.average_balance, None);
    }

    #[test]
    fn test_single_value() {
        let report = calculate_trajectory(&[0.5]);
        assert_eq!(report.trend, Trend::InsufficientData);
        assert_eq!(report.volatility, 0.0);
        assert_eq!(report.stability_score, 1.0);
        assert_eq!(report.start_balance, Some(0.5));
        assert_eq!(report.end_balance, Some(0.5));
        assert_eq!(report.average_balance, Some(0.5));
    }

    #[test]
    fn test_increasing_is_technical_shift() {
        let report = calculate_trajectory(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(report.trend, Trend::TechnicalShift);
    }

    #[test]
    fn test_decreasing_is_emotional_shift() {
        let report = calculate_trajectory(&[0.9, 0.8, 0.7, 0.3, 0.2, 0.1]);
        assert_eq!(report.trend, Trend::EmotionalShift);
    }

    #[test]
    fn test_flat_is_stable() {
        let report = calculate_trajectory(&[0.5, 0.52, 0.5, 0.55, 0.5, 0.53]);
        assert_eq!(report.trend, Trend::Stable);
    }

    #[test]
    fn test_middle_segment_excluded_from_trend() {
        // len 4 → thirds of 1: compares 0.5 with 0.5; the 0.0 and 1.0 in the
        // middle are ignored
        let report = calculate_trajectory(&[0.5, 0.0, 1.0, 0.5]);
        assert_eq!(report.trend, Trend::Stable);
    }

    #[test]
    fn test_two_values_compare_first_and_last() {
        assert_eq!(calculate_trajectory(&[0.2, 0.8]).trend, Trend::TechnicalShift);
        assert_eq!(calculate_trajectory(&[0.8, 0.2]).trend, Trend::EmotionalShift);
        assert_eq!(calculate_trajectory(&[0.5, 0.55]).trend, Trend::Stable);
    }

    #[test]
    fn test_volatility_and_stability() {
        let report = calculate_trajectory(&[0.5, 0.6, 0.5]);
        assert!((report.volatility - 0.1).abs() < 1e-9);
        assert!(report.stability_score.abs() < 1e-9);

        let calm = calculate_trajectory(&[0.5, 0.51, 0.52]);
        assert!((calm.volatility - 0.01).abs() < 1e-9);
        assert!((calm.stability_score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_stability_clamped_at_zero() {
        let report = calculate_trajectory(&[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(report.volatility, 1.0);
        assert_eq!(report.stability_score, 0.0);
    }

    #[test]
    fn test_phases_detected_in_first_occurrence_order() {
        let report = calculate_trajectory(&[0.3, 0.80, 0.56, 0.80, 0.72, 0.56]);
        assert_eq!(
            report.phases_detected,
            vec![
                CollaborationPhase::Development,
                CollaborationPhase::Foundation,
                CollaborationPhase::Mastery,
            ]
        );
    }

    #[test]
    fn test_summary_fields() {
        let report = calculate_trajectory(&[0.2, 0.4, 0.6]);
        assert_eq!(report.start_balance, Some(0.2));
        assert_eq!(report.end_balance, Some(0.6));
        assert!((report.average_balance.unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_phase_progression_runs() {
        let runs = phase_progression(&[0.56, 0.57, 0.80, 0.3, 0.4, 0.56]);
        assert_eq!(runs.len(), 4);

        assert_eq!(runs[0].phase, CollaborationPhase::Foundation);
        assert_eq!((runs[0].start_turn_index, runs[0].end_turn_index, runs[0].duration), (0, 1, 2));
        assert!((runs[0].average_balance - 0.565).abs() < 1e-9);

        assert_eq!(runs[1].phase, CollaborationPhase::Development);
        assert_eq!((runs[1].start_turn_index, runs[1].end_turn_index, runs[1].duration), (2, 2, 1));

        assert_eq!(runs[2].phase, CollaborationPhase::Unknown);
        assert_eq!((runs[2].start_turn_index, runs[2].end_turn_index, runs[2].duration), (3, 4, 2));

        assert_eq!(runs[3].phase, CollaborationPhase::Foundation);
        assert_eq!(runs[3].end_turn_index, 5);
    }

    #[test]
    fn test_phase_progression_empty() {
        assert!(phase_progression(&[]).is_empty());
    }
}
