//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: A vertex carrying a user payload
//! - [`Edge`]: A directed or undirected, optionally weighted connection
//! - [`Graph`]: The graph itself, owning all vertices and edges

mod model;
mod types;
pub mod algorithms;

pub use model::Graph;
pub use types::{Direction, Edge, EdgeId, EdgeWeight, Vertex, VertexId, WeightLabel, WeightedEdge};
