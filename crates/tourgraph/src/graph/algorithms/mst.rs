//! Minimum spanning tree (Prim).

use super::queue::IndexedMinQueue;
use super::validate_weights;
use crate::error::Result;
use crate::graph::{EdgeId, EdgeWeight, Graph, VertexId};
use log::{debug, info};
use serde::Serialize;

/// Edges of a minimum spanning tree, grown from a root vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    root: Option<VertexId>,
    edges: Vec<EdgeId>,
    total_weight: f64,
}

impl SpanningTree {
    /// The vertex the tree was grown from (`None` for an empty graph).
    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    /// Tree edges in the order they were added.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of tree edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the tree's edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Whether `edge` is part of the tree.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Whether the tree spans every vertex of `graph`.
    ///
    /// False when the graph is disconnected and the tree only covers the
    /// root's component.
    pub fn is_spanning<V, E, W>(&self, graph: &Graph<V, E, W>) -> bool {
        graph.vertex_count() == 0 || self.edges.len() + 1 == graph.vertex_count()
    }
}

/// Compute a minimum spanning tree grown from the first vertex.
///
/// # Errors
///
/// Returns [`GraphError::InvalidWeight`](crate::GraphError::InvalidWeight) if
/// any edge weight is negative or NaN.
pub fn minimum_spanning_tree<V, E, W: EdgeWeight>(graph: &Graph<V, E, W>) -> Result<SpanningTree> {
    if graph.is_empty() {
        return Ok(SpanningTree {
            root: None,
            edges: Vec::new(),
            total_weight: 0.0,
        });
    }
    minimum_spanning_tree_from(graph, 0)
}

/// Compute a minimum spanning tree grown from `root` with Prim's algorithm.
///
/// Each vertex tracks its cheapest known connecting edge; an indexed
/// min-queue yields the next vertex to finalize and neighbor keys are
/// lowered in place. Edges are followed in their outgoing direction.
///
/// Only `root`'s component is covered: growth stops at the first vertex with
/// no connecting edge. Use [`SpanningTree::is_spanning`] to detect that case.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
/// if `root` isn't a vertex, and
/// [`GraphError::InvalidWeight`](crate::GraphError::InvalidWeight) if any
/// edge weight is negative or NaN.
pub fn minimum_spanning_tree_from<V, E, W: EdgeWeight>(
    graph: &Graph<V, E, W>,
    root: VertexId,
) -> Result<SpanningTree> {
    graph.check_vertex(root)?;
    validate_weights(graph)?;
    debug!("Growing minimum spanning tree from vertex {root}");

    let n = graph.vertex_count();
    let mut best = vec![f64::INFINITY; n];
    let mut connecting: Vec<Option<EdgeId>> = vec![None; n];
    let mut finalized = vec![false; n];
    best[root] = 0.0;

    let mut queue = IndexedMinQueue::with_capacity(n);
    for vertex in graph.vertex_ids() {
        queue.push(vertex, best[vertex]);
    }

    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    while let Some((current, weight)) = queue.pop() {
        if weight.is_infinite() {
            debug!(
                "{} vertices unreachable from root {root}; tree covers its component only",
                queue.len() + 1
            );
            break;
        }

        finalized[current] = true;
        if let Some(edge_id) = connecting[current] {
            edges.push(edge_id);
            total_weight += weight;
        }

        for edge in graph.edges_out(current)? {
            let Some(next) = edge.other(current) else {
                continue;
            };
            if finalized[next] {
                continue;
            }
            let cost = edge.cost();
            if cost < best[next] {
                best[next] = cost;
                connecting[next] = Some(edge.id());
                queue.decrease_key(next, cost);
            }
        }
    }

    info!(
        "Spanning tree: {} edges, total weight {total_weight}",
        edges.len()
    );
    Ok(SpanningTree {
        root: Some(root),
        edges,
        total_weight,
    })
}
