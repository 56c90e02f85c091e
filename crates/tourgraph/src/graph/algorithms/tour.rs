//! Closed tours: a visiting order plus the edges that walk it.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, EdgeWeight, Graph, VertexId};
use serde::Serialize;

/// A closed walk visiting vertices in order and returning to the first one.
///
/// `edges()[i]` connects `vertices()[i]` to `vertices()[i + 1]`; the last
/// edge returns to `vertices()[0]`. A one-vertex tour has no edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Tour {
    pub(crate) fn new(vertices: Vec<VertexId>, edges: Vec<EdgeId>) -> Self {
        Self { vertices, edges }
    }

    /// Materialize the tour that walks `order` and closes back to its start,
    /// taking the cheapest edge between each consecutive pair.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingTourEdge`] if two consecutive vertices
    /// (or the last and the first) have no edge leading from one to the other.
    pub(crate) fn from_order<V, E, W: EdgeWeight>(
        graph: &Graph<V, E, W>,
        order: Vec<VertexId>,
    ) -> Result<Self> {
        if order.len() <= 1 {
            return Ok(Self::new(order, Vec::new()));
        }
        let edges = order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&from, &to)| {
                graph
                    .cheapest_edge_to(from, to)
                    .map(|edge| edge.id())
                    .ok_or(GraphError::MissingTourEdge { from, to })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(order, edges))
    }

    /// Vertices in visiting order, starting at the tour's start (not repeated at the end).
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edges in travel order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The vertex the tour starts and ends at.
    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    /// Number of distinct vertices visited.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total weight of the tour's edges in `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the tour came from another graph.
    pub fn cost<V, E, W: EdgeWeight>(&self, graph: &Graph<V, E, W>) -> Result<f64> {
        self.edges
            .iter()
            .map(|id| graph.edge(*id).map(|edge| edge.cost()))
            .sum()
    }

    /// Whether this tour is a Hamiltonian cycle of `graph`: every vertex
    /// exactly once, and each edge links consecutive vertices.
    pub fn is_hamiltonian_cycle<V, E, W>(&self, graph: &Graph<V, E, W>) -> bool {
        let n = graph.vertex_count();
        if n == 0 || self.vertices.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &vertex in &self.vertices {
            if vertex >= n || seen[vertex] {
                return false;
            }
            seen[vertex] = true;
        }
        if n == 1 {
            return self.edges.is_empty();
        }
        self.edges.len() == n
            && self.edges.iter().enumerate().all(|(i, &edge_id)| {
                let from = self.vertices[i];
                let to = self.vertices[(i + 1) % n];
                graph
                    .edge(edge_id)
                    .is_ok_and(|edge| edge.leaves(from) && edge.other(from) == Some(to))
            })
    }
}
