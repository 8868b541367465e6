//! Errors at the I/O boundary
//!
//! Scoring itself never fails; these only come from reading files and
//! parsing user-supplied input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading transcripts, configuration, or CLI input
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Transcript or configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for `AnalyzerConfig`
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A balance value in a user-supplied list is not a number in [0, 1]
    #[error("invalid balance value '{0}': expected a number between 0.0 and 1.0")]
    InvalidBalance(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
