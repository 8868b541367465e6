//! Welsh-Winters CLI
//!
//! Usage:
//!   welsh-winters --file transcript.md          # Analyze a transcript file
//!   welsh-winters --text "**Human**: hi ..."    # Analyze inline text
//!   cat transcript.md | welsh-winters           # Analyze stdin
//!   welsh-winters --balances 0.5,0.6,0.8        # Trajectory of a balance series
//!   welsh-winters --file t.md --json            # JSON output

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use welsh_winters::config::AnalyzerConfig;
use welsh_winters::core::{
    calculate_trajectory, hallucination_risk, BalanceAnalyzer, ConversationAnalyzer,
};
use welsh_winters::types::{
    AnalysisReport, ConversationReport, PatternBreakdown, PatternCount, ReportOutput, RiskLevel,
};
use welsh_winters::{AnalyzerError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "welsh-winters",
    version = VERSION,
    about = "Welsh-Winters Balance - score technical vs. emotional language in conversations",
    long_about = "Scores each turn of a transcript by the share of technical vs. emotional\n\
                  language (balance = technical / (technical + emotional), 0.5 when neither\n\
                  appears), then reports phases, trajectory, compliance and hallucination risk.\n\n\
                  Transcript conventions (first match wins):\n  \
                  **Speaker**: text\n  \
                  Speaker: text       (at line start)\n  \
                  [Speaker] text\n\n\
                  Phases:\n  \
                  Foundation   - balance in [0.54, 0.58]\n  \
                  Development  - balance in [0.74, 0.86]\n  \
                  Mastery      - balance in [0.70, 0.81], not Development"
)]
struct Args {
    /// Transcript text to analyze
    #[arg(short, long, conflicts_with_all = ["file", "balances"])]
    text: Option<String>,

    /// Transcript file to analyze
    #[arg(short, long, conflicts_with = "balances")]
    file: Option<PathBuf>,

    /// Comma-separated balance series; prints its trajectory
    #[arg(short, long)]
    balances: Option<String>,

    /// JSON config file (example caps, extra patterns)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show pattern breakdown and per-turn lines
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("welsh_winters=warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(ref series) = args.balances {
        return run_balances(series, &args);
    }

    let config = match args.config {
        Some(ref path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = ConversationAnalyzer::with_config(config);

    let (source, content) = if let Some(ref text) = args.text {
        ("text".to_string(), text.clone())
    } else if let Some(ref path) = args.file {
        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.clone(),
            source,
        })?;
        (path.display().to_string(), content)
    } else {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read transcript from stdin")?;
        ("stdin".to_string(), content)
    };

    let report = analyzer.analyze(&content);
    let output = ReportOutput::new(source, &content, report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }

    if args.verbose {
        let breakdown = BalanceAnalyzer::with_library(analyzer.library().clone())
            .pattern_breakdown(&content);
        print_breakdown(&breakdown);
        if let AnalysisReport::Conversation(ref report) = output.report {
            print_verbose(report);
        }
    }

    Ok(())
}

/// Trajectory and risk for a caller-supplied balance series
fn run_balances(series: &str, args: &Args) -> Result<()> {
    let balances = parse_balances(series)?;
    let trajectory = calculate_trajectory(&balances);

    let average = trajectory.average_balance.unwrap_or(welsh_winters::NEUTRAL_BALANCE);
    let risk = hallucination_risk(average, trajectory.volatility);
    let level = RiskLevel::from_score(risk);

    if args.json {
        let value = serde_json::json!({
            "trajectory": trajectory,
            "hallucination_risk": risk,
            "risk_level": level,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let phases: Vec<String> = trajectory
        .phases_detected
        .iter()
        .map(|p| p.to_string())
        .collect();
    println!(
        "trend={} | volatility={:.3} | stability={:.3} | phases=[{}] | risk={:.3} ({})",
        trajectory.trend,
        trajectory.volatility,
        trajectory.stability_score,
        phases.join(", "),
        risk,
        level,
    );
    Ok(())
}

fn parse_balances(series: &str) -> std::result::Result<Vec<f64>, AnalyzerError> {
    series
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => Ok(value),
            _ => Err(AnalyzerError::InvalidBalance(s.to_string())),
        })
        .collect()
}

fn print_breakdown(breakdown: &PatternBreakdown) {
    fn print_family(name: &str, counts: &[PatternCount]) {
        let entries: Vec<String> = counts
            .iter()
            .map(|c| format!("{}x{}", c.pattern, c.count))
            .collect();
        println!("  {:<10} {}", name, entries.join("  "));
    }

    println!();
    println!("{}", "Patterns".bold());
    print_family("technical", &breakdown.technical);
    print_family("emotional", &breakdown.emotional);
}

fn print_verbose(report: &ConversationReport) {
    println!();
    println!("{}", "Turns".bold());
    for turn in &report.turn_analysis {
        println!(
            "  #{:<3} {:<10} balance={:.3} tech={:<3} emo={:<3} {}",
            turn.turn_index,
            turn.speaker.as_str(),
            turn.balance,
            turn.technical_count,
            turn.emotional_count,
            turn.phase.colored_label(),
        );
    }

    println!();
    println!("{}", "Phase progression".bold());
    for run in &report.phase_progression {
        println!(
            "  turns {}-{} ({}) {} avg={:.3}",
            run.start_turn_index,
            run.end_turn_index,
            run.duration,
            run.phase.colored_label(),
            run.average_balance,
        );
    }

    let metrics = &report.overall_metrics;
    let trajectory = &metrics.trajectory;
    println!();
    println!("{}", "Trajectory".bold());
    println!(
        "  trend={} volatility={:.3} stability={:.3}",
        trajectory.trend, trajectory.volatility, trajectory.stability_score
    );

    println!();
    println!("{}", "Compliance".bold());
    println!(
        "  attribution={:.3} uncertainty={:.3} memory={:.3} awareness={} level={}",
        report.compliance.attribution_score,
        report.compliance.uncertainty_expression_rate,
        report.compliance.memory_persistence_rate,
        metrics.balance_awareness_references,
        report.compliance.compliance_level,
    );
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balances() {
        assert_eq!(parse_balances("0.5, 0.6,0.8,").unwrap(), vec![0.5, 0.6, 0.8]);
        assert!(parse_balances("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_balances_rejects_out_of_range() {
        assert!(matches!(
            parse_balances("0.5,1.2"),
            Err(AnalyzerError::InvalidBalance(ref v)) if v == "1.2"
        ));
        assert!(parse_balances("abc").is_err());
    }
}
