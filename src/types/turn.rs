//! Turn model
//!
//! - Turn = one speaker's contribution, extracted from a transcript
//! - Speaker = normalized role (human / assistant) or the raw label
//! - Message = caller-supplied structured turn ({role, content})

use serde::{Deserialize, Serialize};

/// Substrings that mark a speaker label as the assistant
const ASSISTANT_MARKERS: [&str; 4] = ["ai", "assistant", "bot", "system"];

/// Substrings that mark a speaker label as the human
const HUMAN_MARKERS: [&str; 3] = ["human", "user", "person"];

/// Normalized speaker of a turn
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Speaker {
    Human,
    Assistant,
    /// Label that matched neither role, kept verbatim
    Other(String),
}

impl Speaker {
    /// Normalize a raw speaker label.
    ///
    /// Case-insensitive substring test; assistant markers are checked first,
    /// so "Claire" (contains "ai") is an assistant.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if ASSISTANT_MARKERS.iter().any(|m| lower.contains(m)) {
            Speaker::Assistant
        } else if HUMAN_MARKERS.iter().any(|m| lower.contains(m)) {
            Speaker::Human
        } else {
            Speaker::Other(label.to_string())
        }
    }

    /// Label as written in reports
    pub fn as_str(&self) -> &str {
        match self {
            Speaker::Human => "human",
            Speaker::Assistant => "assistant",
            Speaker::Other(label) => label,
        }
    }
}

impl From<String> for Speaker {
    fn from(label: String) -> Self {
        Speaker::from_label(&label)
    }
}

impl From<Speaker> for String {
    fn from(speaker: Speaker) -> Self {
        speaker.as_str().to_string()
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single turn from one speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    /// Body text; extracted turns are trimmed and never empty
    pub text: String,
    /// Position in the conversation (0-based)
    pub index: usize,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>, index: usize) -> Self {
        Self {
            speaker,
            text: text.into(),
            index,
        }
    }
}

/// Structured message supplied by a caller instead of a raw transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default = "unknown_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn unknown_role() -> String {
    "unknown".to_string()
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Speaker-marker conventions, in extraction priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptFormat {
    /// `**Speaker**: text`
    BoldSpeaker,
    /// `Speaker: text` at the start of a line
    LinePrefix,
    /// `[Speaker] text` or `[Speaker]: text`
    Bracketed,
}

impl TranscriptFormat {
    /// All formats in the order they are tried
    pub const PRIORITY: [TranscriptFormat; 3] = [
        TranscriptFormat::BoldSpeaker,
        TranscriptFormat::LinePrefix,
        TranscriptFormat::Bracketed,
    ];
}

// =============================================================================
// TESTS
// =============================================================================
