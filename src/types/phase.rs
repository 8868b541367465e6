//! Collaboration phase definitions

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Collaboration phase derived from a balance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollaborationPhase {
    /// Balance in [0.54, 0.58]
    #[serde(rename = "Foundation Phase")]
    Foundation,
    /// Balance in [0.74, 0.86]
    #[serde(rename = "Development Phase")]
    Development,
    /// Balance in [0.70, 0.81] and not Development
    #[serde(rename = "Mastery Phase")]
    Mastery,
    /// Outside every range
    #[serde(rename = "Unknown Phase")]
    Unknown,
}

impl CollaborationPhase {
    /// Report label, e.g. "Foundation Phase"
    pub fn label(&self) -> &'static str {
        match self {
            CollaborationPhase::Foundation => "Foundation Phase",
            CollaborationPhase::Development => "Development Phase",
            CollaborationPhase::Mastery => "Mastery Phase",
            CollaborationPhase::Unknown => "Unknown Phase",
        }
    }

    /// Is this one of the named phases?
    pub fn is_known(&self) -> bool {
        !matches!(self, CollaborationPhase::Unknown)
    }

    /// Label colored for terminal display
    pub fn colored_label(&self) -> ColoredString {
        match self {
            CollaborationPhase::Foundation => self.label().cyan(),
            CollaborationPhase::Development => self.label().yellow(),
            CollaborationPhase::Mastery => self.label().green(),
            CollaborationPhase::Unknown => self.label().bright_black(),
        }
    }
}

impl std::fmt::Display for CollaborationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
