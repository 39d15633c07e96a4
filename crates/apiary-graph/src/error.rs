//! Error types for apiary-graph.

use thiserror::Error;

use crate::VertexId;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id outside `0..num_vertices` was used.
    #[error("unknown vertex {vertex} (graph has {num_vertices} vertices)")]
    UnknownVertex {
        vertex: VertexId,
        num_vertices: usize,
    },

    /// An edge from a vertex to itself was supplied.
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// Generation parameters are malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
