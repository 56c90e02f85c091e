//! Graph algorithms.
//!
//! Weighted algorithms (shortest paths, spanning tree, tours) require an
//! [`EdgeWeight`] weight type and reject negative or NaN weights.
//! Cycle enumeration and reachability work on any graph.

mod hamiltonian;
mod mst;
mod queue;
mod shortest_paths;
mod tour;
mod traversal;
mod tsp_approx;

pub use hamiltonian::{all_ham_cycles, for_each_ham_cycle, min_tsp, min_tsp_with_config};
pub use mst::{minimum_spanning_tree, minimum_spanning_tree_from, SpanningTree};
pub use shortest_paths::{shortest_paths, Distances};
pub use tour::Tour;
pub use traversal::{bfs, is_connected, reachable};
pub use tsp_approx::{tsp_approx, tsp_approx_with_rng};

use crate::error::{GraphError, Result};
use crate::graph::{EdgeWeight, Graph};

/// Fail on the first edge whose weight is negative or NaN.
pub(crate) fn validate_weights<V, E, W: EdgeWeight>(graph: &Graph<V, E, W>) -> Result<()> {
    match graph.edges().find(|edge| {
        let weight = edge.cost();
        weight.is_nan() || weight < 0.0
    }) {
        Some(edge) => Err(GraphError::InvalidWeight {
            edge_id: edge.id(),
            weight: edge.cost(),
        }),
        None => Ok(()),
    }
}
