//! Turn extractor: raw transcript → ordered speaker turns
//!
//! Conventions are tried in priority order (bold, line prefix, bracketed).
//! The first one with any marker in the document is used for the whole
//! document. A turn body runs from the end of its marker to the start of the
//! next marker of the same convention, or to end of input. Line-prefix and
//! bracketed markers only count at the start of a line.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use crate::types::{Speaker, TranscriptFormat, Turn};

lazy_static! {
    /// `**Speaker**:`
    static ref RE_BOLD_SPEAKER: Regex = Regex::new(r"\*\*([^*]+)\*\*:").unwrap();

    /// `Speaker:` at the start of a line, letters only
    static ref RE_LINE_PREFIX: Regex = Regex::new(r"(?m)^([A-Za-z]+):").unwrap();

    /// `[Speaker]` at the start of a line, optional trailing colon
    static ref RE_BRACKETED: Regex = Regex::new(r"(?m)^[ \t]*\[([^\]\n]+)\]:?").unwrap();
}

impl TranscriptFormat {
    /// Marker regex; capture group 1 is the speaker label
    fn marker(&self) -> &'static Regex {
        match self {
            TranscriptFormat::BoldSpeaker => &*RE_BOLD_SPEAKER,
            TranscriptFormat::LinePrefix => &*RE_LINE_PREFIX,
            TranscriptFormat::Bracketed => &*RE_BRACKETED,
        }
    }
}

/// Turns plus the convention that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// None when no convention matched anywhere
    pub format: Option<TranscriptFormat>,
    pub turns: Vec<Turn>,
}

/// Transcript turn extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnExtractor;

impl TurnExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract turns using the first convention with at least one marker.
    ///
    /// A convention whose markers all have empty bodies still wins, yielding
    /// no turns; later conventions are not tried.
    pub fn extract(&self, content: &str) -> Extraction {
        for format in TranscriptFormat::PRIORITY {
            let markers: Vec<(usize, usize, &str)> = format
                .marker()
                .captures_iter(content)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let label = caps.get(1)?;
                    Some((whole.start(), whole.end(), label.as_str()))
                })
                .collect();

            if markers.is_empty() {
                continue;
            }

            let mut turns = Vec::new();
            for (i, &(_, body_start, label)) in markers.iter().enumerate() {
                let body_end = markers
                    .get(i + 1)
                    .map(|&(next_start, _, _)| next_start)
                    .unwrap_or(content.len());
                let body = content[body_start..body_end].trim();
                if body.is_empty() {
                    continue;
                }
                let index = turns.len();
                turns.push(Turn::new(Speaker::from_label(label.trim()), body, index));
            }

            debug!(
                format = ?format,
                markers = markers.len(),
                turns = turns.len(),
                "extracted transcript turns"
            );
            return Extraction {
                format: Some(format),
                turns,
            };
        }

        debug!("no transcript convention matched");
        Extraction {
            format: None,
            turns: Vec::new(),
        }
    }

    /// Just the turns
    pub fn extract_turns(&self, content: &str) -> Vec<Turn> {
        self.extract(content).turns
    }
}

/// Extract turns with the default extractor
pub fn extract_turns(content: &str) -> Vec<Turn> {
    TurnExtractor::new().extract_turns(content)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn speakers(turns: &[Turn]) -> Vec<&str> {
        turns.iter().map(|t| t.speaker.as_str()).collect()
    }

    fn texts(turns: &[Turn]) -> Vec<&str> {
        turns.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_bold_round_trip() {
        let extraction = TurnExtractor::new().extract("**human**: Hi\n\n**assistant**: Hello\n\n");
        assert_eq!(extraction.format, Some(TranscriptFormat::BoldSpeaker));
        assert_eq!(speakers(&extraction.turns), vec!["human", "assistant"]);
        assert_eq!(texts(&extraction.turns), vec!["Hi", "Hello"]);
        assert_eq!(extraction.turns[0].index, 0);
        assert_eq!(extraction.turns[1].index, 1);
    }

    #[test]
    fn test_multiline_bodies() {
        let turns = extract_turns("**User**: first line\nsecond line\n\n**Claude AI**: reply\nmore");
        assert_eq!(texts(&turns), vec!["first line\nsecond line", "reply\nmore"]);
        assert_eq!(speakers(&turns), vec!["human", "assistant"]);
    }

    #[test]
    fn test_line_prefix_format() {
        let extraction = TurnExtractor::new().extract("Human: Hello there\nAssistant: Hi!\nHuman: Bye");
        assert_eq!(extraction.format, Some(TranscriptFormat::LinePrefix));
        assert_eq!(speakers(&extraction.turns), vec!["human", "assistant", "human"]);
        assert_eq!(texts(&extraction.turns), vec!["Hello there", "Hi!", "Bye"]);
    }

    #[test]
    fn test_line_prefix_requires_line_start() {
        let turns = extract_turns("Alice: see the note: here\nBob: ok");
        assert_eq!(speakers(&turns), vec!["Alice", "Bob"]);
        assert_eq!(texts(&turns), vec!["see the note: here", "ok"]);
    }

    #[test]
    fn test_bracketed_format() {
        let extraction = TurnExtractor::new().extract("[User] What is an API?\n[Bot] An interface.");
        assert_eq!(extraction.format, Some(TranscriptFormat::Bracketed));
        assert_eq!(speakers(&extraction.turns), vec!["human", "assistant"]);
        assert_eq!(texts(&extraction.turns), vec!["What is an API?", "An interface."]);
    }

    #[test]
    fn test_bracketed_with_colon() {
        let turns = extract_turns("[Human]: hi\n[Assistant]: hello");
        assert_eq!(texts(&turns), vec!["hi", "hello"]);
    }

    #[test]
    fn test_bracketed_ignores_inline_brackets() {
        let turns = extract_turns("[User] What does arr[0] return?\n[Bot] The first element [1].");
        assert_eq!(speakers(&turns), vec!["human", "assistant"]);
        assert_eq!(texts(&turns), vec!["What does arr[0] return?", "The first element [1]."]);
    }

    #[test]
    fn test_bracketed_label_stays_on_one_line() {
        let turns = extract_turns("  [User] see [note\nmore] here\n[Bot] ok");
        assert_eq!(speakers(&turns), vec!["human", "assistant"]);
        assert_eq!(turns[0].text, "see [note\nmore] here");
    }

    #[test]
    fn test_line_prefix_multiline_body() {
        let turns = extract_turns("Human: first line\nstill the human\n  indented: too\nAssistant: reply");
        assert_eq!(speakers(&turns), vec!["human", "assistant"]);
        assert_eq!(texts(&turns), vec!["first line\nstill the human\n  indented: too", "reply"]);
    }

    #[test]
    fn test_bold_takes_priority_and_formats_do_not_mix() {
        // Line-prefix markers inside a bold transcript stay in the bodies
        let turns = extract_turns("**Human**: question\nNote: detail\n**Assistant**: answer");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "question\nNote: detail");
    }

    #[test]
    fn test_empty_bodies_dropped() {
        let turns = extract_turns("**Human**:   \n**Assistant**: answer\n**Human**:");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, Speaker::Assistant);
        assert_eq!(turns[0].index, 0);
    }

    #[test]
    fn test_first_format_with_markers_wins() {
        let extraction = TurnExtractor::new().extract("**Human**:\nUser: hello");
        assert_eq!(extraction.format, Some(TranscriptFormat::BoldSpeaker));
        // the body after **Human**: is "User: hello"
        assert_eq!(extraction.turns.len(), 1);

        let extraction = TurnExtractor::new().extract("**Human**:   ");
        assert_eq!(extraction.format, Some(TranscriptFormat::BoldSpeaker));
        assert!(extraction.turns.is_empty());
    }

    #[test]
    fn test_unknown_labels_kept() {
        let turns = extract_turns("**Mentor**: hello\n**Student**: hi");
        assert_eq!(speakers(&turns), vec!["Mentor", "Student"]);
    }

    #[test]
    fn test_no_markers() {
        let extraction = TurnExtractor::new().extract("just some prose without speakers.");
        assert_eq!(extraction.format, None);
        assert!(extraction.turns.is_empty());
        assert!(extract_turns("").is_empty());
    }
}
