//! Error types for apiary-report.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing was sampled during the run
    #[error("history is empty; run with a log interval no larger than the iteration count")]
    EmptyHistory,
}
