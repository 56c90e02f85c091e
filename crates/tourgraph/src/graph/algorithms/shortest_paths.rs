//! Single-source shortest paths (Dijkstra) over non-negative weights.

use super::queue::IndexedMinQueue;
use super::validate_weights;
use crate::error::Result;
use crate::graph::{EdgeId, EdgeWeight, Graph, VertexId};
use log::{debug, trace};
use serde::Serialize;
use std::collections::HashMap;

/// Shortest distances from one source to every vertex of a graph.
///
/// Unreachable vertices have distance `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distances {
    source: VertexId,
    distances: Vec<f64>,
    // (previous vertex, edge taken) on a shortest path, per vertex
    predecessors: Vec<Option<(VertexId, EdgeId)>>,
}

impl Distances {
    /// The vertex distances are measured from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance to `vertex`, or `None` if it isn't a vertex of the graph.
    pub fn get(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Whether `vertex` has a finite distance.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some_and(f64::is_finite)
    }

    /// Number of vertices covered (every vertex of the graph).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `(vertex, distance)` pairs in vertex creation order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Distances as a map keyed by vertex.
    pub fn to_map(&self) -> HashMap<VertexId, f64> {
        self.iter().collect()
    }

    /// Edges of a shortest path from the source to `target`, in travel order.
    ///
    /// Returns `None` when `target` is unreachable or unknown, and an empty
    /// path for the source itself.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<EdgeId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = target;
        while let Some((previous, edge_id)) = self.predecessors[current] {
            path.push(edge_id);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Compute the minimum cumulative weight from `source` to every vertex.
///
/// Classic label-setting relaxation: every vertex starts in an indexed
/// min-queue keyed by its tentative distance; each extracted vertex relaxes
/// its outgoing edges and lowers the neighbors' keys in place.
/// Runs in O(E log V).
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
/// if `source` isn't a vertex, and
/// [`GraphError::InvalidWeight`](crate::GraphError::InvalidWeight) if any
/// edge weight is negative or NaN.
pub fn shortest_paths<V, E, W: EdgeWeight>(
    graph: &Graph<V, E, W>,
    source: VertexId,
) -> Result<Distances> {
    graph.check_vertex(source)?;
    validate_weights(graph)?;
    debug!("Computing shortest paths from vertex {source}");

    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source] = 0.0;

    let mut queue = IndexedMinQueue::with_capacity(n);
    for vertex in graph.vertex_ids() {
        queue.push(vertex, distances[vertex]);
    }

    while let Some((current, distance)) = queue.pop() {
        if distance.is_infinite() {
            trace!("{} vertices unreachable from {source}", queue.len() + 1);
            break;
        }

        for edge in graph.edges_out(current)? {
            let Some(next) = edge.other(current) else {
                continue;
            };
            let candidate = distance + edge.cost();
            if candidate < distances[next] {
                trace!("Relaxing {next}: {} -> {candidate}", distances[next]);
                distances[next] = candidate;
                predecessors[next] = Some((current, edge.id()));
                // Settled vertices are out of the queue; with non-negative
                // weights they can never be improved here.
                queue.decrease_key(next, candidate);
            }
        }
    }

    Ok(Distances {
        source,
        distances,
        predecessors,
    })
}
