//! Error types for triage operations.

use thiserror::Error;

/// Errors that can occur while feeding snapshots into the triage engine.
///
/// Data-shape problems inside individual records never error; they default
/// or skip at the record level. Only a snapshot that is not the expected
/// container shape at all is reported, so upstream defects surface during
/// development instead of producing a silent empty board.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Snapshot input was not the expected container shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for triage operations.
pub type Result<T> = std::result::Result<T, TriageError>;
