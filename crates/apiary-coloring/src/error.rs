//! Error types for apiary-coloring.

use apiary_graph::GraphError;
use thiserror::Error;

use crate::validation::Conflict;

/// Result type for coloring operations.
pub type Result<T> = std::result::Result<T, ColoringError>;

/// Errors that can occur while configuring or running the colony.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// A graph query failed (e.g. unknown vertex).
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Run or engine parameters are malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Post-run validation found adjacent vertices sharing a color.
    #[error(
        "coloring invariant violated: {} conflicting edge(s), first {}",
        conflicts.len(),
        conflicts.first().map(ToString::to_string).unwrap_or_default()
    )]
    InvariantViolation { conflicts: Vec<Conflict> },
}
