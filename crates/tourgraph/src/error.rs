//! Error types for tourgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// Result type alias for tourgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors fail fast and name the vertex or edge involved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Vertex id was not issued by this graph
    #[error("Vertex not found: {vertex_id}")]
    VertexNotFound {
        /// The unknown vertex id
        vertex_id: VertexId,
    },

    /// Edge id was not issued by this graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// The unknown edge id
        edge_id: EdgeId,
    },

    /// An equal edge is already present; the graph was left unchanged
    #[error("Edge already exists: {from} -> {to} (directed: {directed})")]
    DuplicateEdge {
        /// First endpoint
        from: VertexId,
        /// Second endpoint
        to: VertexId,
        /// Directedness of the rejected edge
        directed: bool,
    },

    /// Source or target requested from an undirected edge
    #[error("Edge {edge_id} is undirected; it has no source or target")]
    UndirectedEdge {
        /// The undirected edge
        edge_id: EdgeId,
    },

    /// Weight is negative or NaN
    #[error("Invalid weight {weight} on edge {edge_id}: weights must be non-negative")]
    InvalidWeight {
        /// Offending edge
        edge_id: EdgeId,
        /// The weight as seen by the algorithm
        weight: f64,
    },

    /// A traversal could not reach every vertex
    #[error("Graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices reached from the start
        reached: usize,
        /// Vertices in the graph
        total: usize,
    },

    /// A tour needs an edge between two vertices that are not adjacent
    #[error("No edge between {from} and {to} to continue the tour")]
    MissingTourEdge {
        /// Vertex the tour leaves
        from: VertexId,
        /// Vertex the tour needs to reach
        to: VertexId,
    },

    /// Exhaustive search refused because the graph exceeds the configured limit
    #[error("Graph too large for exhaustive search ({vertices} vertices > {limit} limit)")]
    TooLarge {
        /// Vertices in the graph
        vertices: usize,
        /// Configured limit
        limit: usize,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::VertexNotFound`].
    pub fn vertex_not_found(vertex_id: VertexId) -> Self {
        Self::VertexNotFound { vertex_id }
    }

    /// Shorthand for [`GraphError::EdgeNotFound`].
    pub fn edge_not_found(edge_id: EdgeId) -> Self {
        Self::EdgeNotFound { edge_id }
    }
}
