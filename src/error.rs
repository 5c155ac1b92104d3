//! Error type for loading, validating, and scheduling.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Errors surfaced by the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An input line is malformed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Configuration values are unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Loads failed ingestion checks.
    #[error("{} invalid load(s): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A solution could not be serialized.
    #[error("failed to serialize solution: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
