//! Pattern library: compiled match rules and counting
//!
//! Every rule is compiled once, case-insensitively. A rule that fails to
//! compile stays in its set but never matches, so one bad pattern cannot
//! abort an analysis.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;
use crate::config::ExtraPatterns;
use crate::core::vocabulary;
use crate::types::PatternCount;

lazy_static! {
    /// Built-in vocabularies, compiled once per process
    static ref STANDARD_LIBRARY: PatternLibrary = PatternLibrary::compile_standard();
}

/// One immutable text-matching rule
#[derive(Debug, Clone)]
pub struct MatchRule {
    pattern: String,
    /// None when the pattern did not compile
    regex: Option<Regex>,
}

impl MatchRule {
    /// Compile `pattern` case-insensitively. Invalid patterns are logged and
    /// kept as a rule that matches nothing.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&format!("(?i){}", pattern)) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "skipping invalid match rule");
                None
            }
        };
        Self { pattern, regex }
    }

    /// Source pattern as written
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Did the pattern compile?
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Non-overlapping matches in `text`
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map(|re| re.find_iter(text).count())
            .unwrap_or(0)
    }

    /// Matched text, first `limit` occurrences
    pub fn find(&self, text: &str, limit: usize) -> Vec<String> {
        match &self.regex {
            Some(re) => re
                .find_iter(text)
                .take(limit)
                .map(|m| m.as_str().to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Named, ordered collection of rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<MatchRule>,
}

impl RuleSet {
    /// Compile every pattern into a rule
    pub fn new<I, S>(name: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            rules: patterns.into_iter().map(MatchRule::new).collect(),
        }
    }

    /// Build from already compiled rules
    pub fn from_rules(name: impl Into<String>, rules: Vec<MatchRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Append more patterns after the existing rules
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(patterns.into_iter().map(MatchRule::new));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total matches summed over all rules
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.rules.iter().map(|rule| rule.count(text)).sum()
    }

    /// Per-rule counts in rule order, zero-count rules omitted
    pub fn breakdown(&self, text: &str) -> Vec<PatternCount> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let count = rule.count(text);
                (count > 0).then(|| PatternCount {
                    pattern: rule.pattern().to_string(),
                    count,
                })
            })
            .collect()
    }

    /// First `max` matched strings, walking rules in order
    pub fn examples(&self, text: &str, max: usize) -> Vec<String> {
        let mut examples = Vec::new();
        for rule in &self.rules {
            if examples.len() >= max {
                break;
            }
            examples.extend(rule.find(text, max - examples.len()));
        }
        examples
    }
}

/// Count matches of `ruleset` in `text`
pub fn count_patterns(text: &str, ruleset: &RuleSet) -> usize {
    ruleset.count(text)
}

/// Non-zero per-rule counts of `ruleset` in `text`
pub fn pattern_breakdown(text: &str, ruleset: &RuleSet) -> Vec<PatternCount> {
    ruleset.breakdown(text)
}

/// All rule sets used by the analyzers
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    pub technical: RuleSet,
    pub emotional: RuleSet,
    pub uncertainty: RuleSet,
    pub memory: RuleSet,
    pub attribution: RuleSet,
    pub balance_awareness: RuleSet,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl PatternLibrary {
    /// Built-in vocabularies (shared compiled copy)
    pub fn standard() -> Self {
        STANDARD_LIBRARY.clone()
    }

    /// Built-in vocabularies followed by caller-supplied patterns
    pub fn with_extras(extras: &ExtraPatterns) -> Self {
        let mut library = Self::standard();
        library.technical.extend(extras.technical.iter().cloned());
        library.emotional.extend(extras.emotional.iter().cloned());
        library.uncertainty.extend(extras.uncertainty.iter().cloned());
        library.memory.extend(extras.memory.iter().cloned());
        library.attribution.extend(extras.attribution.iter().cloned());
        library.balance_awareness.extend(extras.balance_awareness.iter().cloned());
        library
    }

    fn compile_standard() -> Self {
        Self {
            technical: RuleSet::new("technical", vocabulary::TECHNICAL.iter().copied()),
            emotional: RuleSet::new("emotional", vocabulary::EMOTIONAL.iter().copied()),
            uncertainty: RuleSet::new("uncertainty", vocabulary::UNCERTAINTY.iter().copied()),
            memory: RuleSet::new("memory", vocabulary::MEMORY.iter().copied()),
            attribution: RuleSet::new("attribution", vocabulary::ATTRIBUTION.iter().copied()),
            balance_awareness: RuleSet::new(
                "balance_awareness",
                vocabulary::BALANCE_AWARENESS.iter().copied(),
            ),
        }
    }

    /// Rule sets in a fixed order
    pub fn rule_sets(&self) -> [&RuleSet; 6] {
        [
            &self.technical,
            &self.emotional,
            &self.uncertainty,
            &self.memory,
            &self.attribution,
            &self.balance_awareness,
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_patterns_compile() {
        let library = PatternLibrary::standard();
        for set in library.rule_sets() {
            for rule in set.rules() {
                assert!(rule.is_valid(), "{} pattern failed to compile: {}", set.name(), rule.pattern());
            }
        }
    }

    #[test]
    fn test_builtin_set_sizes() {
        let library = PatternLibrary::standard();
        assert_eq!(library.technical.len(), vocabulary::TECHNICAL.len());
        assert_eq!(library.emotional.len(), vocabulary::EMOTIONAL.len());
        assert_eq!(library.balance_awareness.len(), 7);
    }

    #[test]
    fn test_empty_text_counts_zero() {
        let library = PatternLibrary::standard();
        for set in library.rule_sets() {
            assert_eq!(set.count(""), 0);
        }
    }

    #[test]
    fn test_case_insensitive_and_repeated() {
        let set = RuleSet::new("t", [r"\bapi\b"]);
        assert_eq!(set.count("API api Api"), 3);
    }

    #[test]
    fn test_word_boundaries() {
        let set = RuleSet::new("t", [r"\btest\b"]);
        assert_eq!(set.count("testing contest test"), 1);
    }

    #[test]
    fn test_counts_sum_over_rules() {
        let library = PatternLibrary::standard();
        // API, JSON, endpoint
        assert_eq!(library.technical.count("Call the API endpoint and parse JSON."), 3);
    }

    #[test]
    fn test_malformed_rule_is_skipped() {
        let valid = RuleSet::new("t", [r"\bdata\b", r"\bquery\b"]);
        let with_bad = RuleSet::new("t", [r"\bdata\b", r"(unclosed", r"\bquery\b"]);
        let text = "data query data";

        assert!(!with_bad.rules()[1].is_valid());
        assert_eq!(with_bad.count(text), valid.count(text));
        assert_eq!(with_bad.count(text), 3);
    }

    #[test]
    fn test_rule_order_does_not_change_count() {
        let patterns = [r"\bfeel\b", r"\bhappy\b", r"\bteam\b", r"\bour\b"];
        let forward = RuleSet::new("e", patterns);
        let reversed = RuleSet::new("e", patterns.iter().rev().copied());
        let text = "I feel happy about our team, our happy team.";
        assert_eq!(forward.count(text), reversed.count(text));
        assert_eq!(forward.count(text), 7);
    }

    #[test]
    fn test_breakdown_omits_zero_counts() {
        let set = RuleSet::new("t", [r"\bfunction\b", r"\bclass\b", r"\bAPI\b"]);
        let breakdown = set.breakdown("function API function");
        assert_eq!(
            breakdown,
            vec![
                PatternCount { pattern: r"\bfunction\b".to_string(), count: 2 },
                PatternCount { pattern: r"\bAPI\b".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_examples_follow_rule_order_and_cap() {
        let set = RuleSet::new("t", [r"\bjson\b", r"\bapi\b"]);
        let text = "API first, then JSON, then api again";
        assert_eq!(set.examples(text, 2), vec!["JSON", "API"]);
        assert_eq!(set.examples(text, 1), vec!["JSON"]);
        assert_eq!(set.examples(text, 5), vec!["JSON", "API", "api"]);
        assert!(set.examples(text, 0).is_empty());
    }

    #[test]
    fn test_extras_appended_after_builtin() {
        let extras = ExtraPatterns {
            technical: vec![r"\bwidget\b".to_string(), r"[bad".to_string()],
            ..Default::default()
        };
        let library = PatternLibrary::with_extras(&extras);
        let standard = PatternLibrary::standard();

        assert_eq!(library.technical.len(), standard.technical.len() + 2);
        assert_eq!(library.technical.count("widget widget"), 2);
        assert_eq!(library.emotional.len(), standard.emotional.len());
    }

    #[test]
    fn test_free_functions_match_methods() {
        let library = PatternLibrary::standard();
        let text = "I feel grateful for our team";
        assert_eq!(count_patterns(text, &library.emotional), library.emotional.count(text));
        assert_eq!(pattern_breakdown(text, &library.emotional), library.emotional.breakdown(text));
    }
}
