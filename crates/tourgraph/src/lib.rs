//! # tourgraph
//!
//! A small in-memory graph library with classic weighted-graph algorithms:
//! shortest paths, minimum spanning trees and travelling-salesman tours.
//!
//! ## Core Principles
//!
//! - **Explicit Errors**: Every fallible operation returns [`Result`]
//! - **Stable Ids**: Vertices and edges are addressed by creation-order index
//! - **Typed Weights**: Unweighted graphs can't reach weighted algorithms
//! - **Reproducible**: Randomized tours take a seed through [`TourConfig`]
//!
//! ## Architecture
//!
//! tourgraph is organized in layers:
//!
//! ```text
//! Tour Algorithms (Hamiltonian cycles, exact TSP, MST-based TSP)
//!     ↓
//! Weighted Algorithms (Dijkstra, Prim)
//!     ↓
//! Core Graph (vertices, edges, adjacency views)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tourgraph::{Graph, TourConfig};
//!
//! let mut graph: Graph<&str, (), f64> = Graph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_undirected_edge(a, b, 1.0).unwrap();
//! graph.add_undirected_edge(b, c, 2.0).unwrap();
//! graph.add_undirected_edge(a, c, 4.0).unwrap();
//!
//! let distances = graph.shortest_paths(a).unwrap();
//! assert_eq!(distances.get(c), Some(3.0));
//!
//! let tour = graph.min_tsp(a).unwrap().unwrap();
//! assert_eq!(tour.cost(&graph).unwrap(), 7.0);
//!
//! let approx = graph.tsp_approx(&TourConfig::seeded(42)).unwrap();
//! assert!(approx.is_hamiltonian_cycle(&graph));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;

// Re-export main types
pub use config::TourConfig;
pub use error::{GraphError, Result};
pub use graph::algorithms::{Distances, SpanningTree, Tour};
pub use graph::{
    Direction, Edge, EdgeId, EdgeWeight, Graph, Vertex, VertexId, WeightLabel, WeightedEdge,
};
