//! The in-memory [`Graph`]: append-only vertex and edge storage with adjacency views.

use super::algorithms::{self, Distances, SpanningTree, Tour};
use super::types::{Direction, Edge, EdgeId, EdgeKey, EdgeWeight, Vertex, VertexId, WeightLabel};
use crate::config::TourConfig;
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A generic directed/undirected, optionally weighted graph.
///
/// Vertices and edges are created only through the graph's factory methods
/// ([`add_vertex`](Graph::add_vertex), [`add_edge`](Graph::add_edge)), which
/// keeps adjacency consistent with the vertex and edge sets. Growth is
/// append-only: ids are creation-order indexes and stay valid forever.
///
/// Type parameters: `V` vertex payload, `E` edge payload, `W` edge weight
/// (`()` for unweighted graphs, any [`EdgeWeight`] for weighted ones).
#[derive(Debug, Clone)]
pub struct Graph<V, E = (), W = ()> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<Edge<E, W>>,
    // Uniqueness index: one entry per distinct edge under edge equality
    edge_index: HashMap<EdgeKey, EdgeId>,
}

impl<V, E, W> Default for Graph<V, E, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, W> Graph<V, E, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Create a graph with `n` default-payload vertices and no edges.
    pub fn with_vertices(n: usize) -> Self
    where
        V: Default,
    {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex(V::default());
        }
        graph
    }

    /// Add a vertex carrying `data`.
    ///
    /// Always succeeds. The returned id is the vertex's creation-order index.
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = self.vertices.len();
        trace!("Adding vertex: id={id}");
        self.vertices.push(Vertex::new(id, data));
        id
    }

    /// Add an edge between `u` and `v`.
    ///
    /// For directed edges `u` is the source and `v` the target.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not a vertex
    /// of this graph, and [`GraphError::DuplicateEdge`] if an equal edge is
    /// already present. The graph is unchanged in both cases.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        directed: bool,
        weight: W,
        data: E,
    ) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if self.edge_index.contains_key(&EdgeKey::new(u, v, directed)) {
            debug!("Rejecting duplicate edge: {u} -> {v} (directed: {directed})");
            return Err(GraphError::DuplicateEdge {
                from: u,
                to: v,
                directed,
            });
        }

        Ok(self.insert_edge(u, v, directed, weight, data))
    }

    /// Add an undirected edge with a default payload.
    ///
    /// # Errors
    ///
    /// See [`add_edge`](Graph::add_edge).
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId, weight: W) -> Result<EdgeId>
    where
        E: Default,
    {
        self.add_edge(u, v, false, weight, E::default())
    }

    /// Add a directed edge `source -> target` with a default payload.
    ///
    /// # Errors
    ///
    /// See [`add_edge`](Graph::add_edge).
    pub fn add_directed_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: W,
    ) -> Result<EdgeId>
    where
        E: Default,
    {
        self.add_edge(source, target, true, weight, E::default())
    }

    /// Get a vertex by id (its creation-order index).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Get a vertex's payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn vertex_data(&self, id: VertexId) -> Result<&V> {
        self.vertex(id).map(|vertex| &vertex.data)
    }

    /// Get a mutable reference to a vertex's payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn vertex_data_mut(&mut self, id: VertexId) -> Result<&mut V> {
        self.vertices
            .get_mut(id)
            .map(|vertex| &mut vertex.data)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Get an edge by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge<E, W>> {
        self.edges
            .get(id)
            .ok_or_else(|| GraphError::edge_not_found(id))
    }

    /// Get a mutable reference to an edge.
    ///
    /// Only the weight and payload are writable; endpoints and directedness
    /// are fixed at creation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge<E, W>> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| GraphError::edge_not_found(id))
    }

    /// Get the total number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.vertices.iter()
    }

    /// All vertex ids in creation order.
    pub fn vertex_ids(&self) -> std::ops::Range<VertexId> {
        0..self.vertices.len()
    }

    /// All edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E, W>> + '_ {
        self.edges.iter()
    }

    /// Edges leaving `vertex`: directed edges it is the source of plus every
    /// undirected edge touching it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn edges_out(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge<E, W>> + '_> {
        Ok(self
            .incident(vertex)?
            .filter(move |edge| edge.leaves(vertex)))
    }

    /// Edges entering `vertex`: directed edges it is the target of plus every
    /// undirected edge touching it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn edges_in(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge<E, W>> + '_> {
        Ok(self
            .incident(vertex)?
            .filter(move |edge| edge.enters(vertex)))
    }

    /// Get all neighbor vertices connected by edges in the specified direction.
    ///
    /// Neighbors are listed once each, in the order their edges were added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex doesn't exist.
    pub fn neighbors(&self, vertex: VertexId, direction: Direction) -> Result<Vec<VertexId>> {
        let mut seen = HashSet::new();
        let neighbors = self
            .incident(vertex)?
            .filter(|edge| match direction {
                Direction::Outgoing => edge.leaves(vertex),
                Direction::Incoming => edge.enters(vertex),
                Direction::Both => true,
            })
            .filter_map(|edge| edge.other(vertex))
            .filter(|neighbor| seen.insert(*neighbor))
            .collect();
        Ok(neighbors)
    }

    /// The edge leaving `u` towards `v`: a directed `u -> v` edge, or else an
    /// undirected `{u, v}` edge.
    pub fn edge_to(&self, u: VertexId, v: VertexId) -> Option<&Edge<E, W>> {
        self.edge_index
            .get(&EdgeKey::new(u, v, true))
            .or_else(|| self.edge_index.get(&EdgeKey::new(u, v, false)))
            .map(|id| &self.edges[*id])
    }

    /// The edge entering `u` from `v`: a directed `v -> u` edge, or else an
    /// undirected `{u, v}` edge.
    pub fn edge_from(&self, u: VertexId, v: VertexId) -> Option<&Edge<E, W>> {
        self.edge_to(v, u)
    }

    /// The edge between `u` and `v`: the edge from `u` to `v` if there is one,
    /// else the edge from `v` to `u`.
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<&Edge<E, W>> {
        self.edge_to(u, v).or_else(|| self.edge_to(v, u))
    }

    /// Boolean adjacency matrix: `m[i][j]` is true iff there is an edge from
    /// vertex `i` to vertex `j`.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (0..n).map(|j| self.edge_to(i, j).is_some()).collect())
            .collect()
    }

    /// A new graph with the same vertex payloads (same order) and every edge
    /// reversed.
    ///
    /// The copy shares nothing with `self`; edge ids are preserved.
    pub fn reverse(&self) -> Self
    where
        V: Clone,
        E: Clone,
        W: Clone,
    {
        debug!(
            "Reversing graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        );
        let mut reversed = Self::new();
        for vertex in &self.vertices {
            reversed.add_vertex(vertex.data.clone());
        }
        for edge in &self.edges {
            // Reversal is a bijection on edge keys, so no duplicates can appear
            let [u, v] = edge.endpoints();
            reversed.insert_edge(v, u, edge.is_directed(), edge.weight.clone(), edge.data.clone());
        }
        reversed
    }

    /// Build an independent graph from a collection of `source`'s edges.
    ///
    /// Every distinct endpoint becomes a new vertex (first-seen order) with a
    /// cloned payload; each edge keeps its weight, directedness and payload.
    /// Edges equal to one already taken are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if an edge references a vertex
    /// that `source` doesn't have.
    pub fn from_edges<'a, I>(source: &Self, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge<E, W>>,
        V: Clone,
        E: Clone + 'a,
        W: Clone + 'a,
    {
        let mut graph = Self::new();
        let mut vertex_map: HashMap<VertexId, VertexId> = HashMap::new();

        for edge in edges {
            let mut mapped = [0; 2];
            for (slot, endpoint) in mapped.iter_mut().zip(edge.endpoints()) {
                *slot = match vertex_map.get(&endpoint) {
                    Some(id) => *id,
                    None => {
                        let id = graph.add_vertex(source.vertex_data(endpoint)?.clone());
                        vertex_map.insert(endpoint, id);
                        id
                    }
                };
            }

            match graph.add_edge(
                mapped[0],
                mapped[1],
                edge.is_directed(),
                edge.weight.clone(),
                edge.data.clone(),
            ) {
                Ok(_) => {}
                Err(GraphError::DuplicateEdge { .. }) => {
                    trace!("Skipping duplicate edge {} while rebuilding", edge.id());
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            "Built graph from edges: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Check that `id` names a vertex of this graph.
    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(id))
        }
    }

    // Private helper methods

    fn incident(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge<E, W>> + '_> {
        let vertex = self.vertex(vertex)?;
        Ok(vertex.incident_edges().iter().map(|id| &self.edges[*id]))
    }

    fn insert_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        directed: bool,
        weight: W,
        data: E,
    ) -> EdgeId {
        let id = self.edges.len();
        trace!("Adding edge: id={id}, {u} -> {v} (directed: {directed})");
        let edge = Edge::new(id, u, v, directed, weight, data);

        self.edge_index.insert(edge.key(), id);
        self.vertices[u].attach(id);
        if u != v {
            self.vertices[v].attach(id);
        }
        self.edges.push(edge);
        id
    }
}

// ===== Algorithm Methods =====

impl<V, E, W: EdgeWeight> Graph<V, E, W> {
    /// The cheapest edge leaving `u` towards `v`.
    ///
    /// Differs from [`edge_to`](Graph::edge_to) only when a directed `u -> v`
    /// edge and an undirected `{u, v}` edge both exist. Ties keep the earlier
    /// edge. Returns `None` for unknown vertices or when no such edge exists.
    pub fn cheapest_edge_to(&self, u: VertexId, v: VertexId) -> Option<&Edge<E, W>> {
        self.edges_out(u)
            .ok()?
            .filter(|edge| edge.other(u) == Some(v))
            .min_by(|a, b| a.cost().total_cmp(&b.cost()))
    }

    /// Single-source shortest path distances from `source`.
    ///
    /// See [`algorithms::shortest_paths`].
    pub fn shortest_paths(&self, source: VertexId) -> Result<Distances> {
        algorithms::shortest_paths(self, source)
    }

    /// Minimum spanning tree rooted at the first vertex.
    ///
    /// See [`algorithms::minimum_spanning_tree`].
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        algorithms::minimum_spanning_tree(self)
    }

    /// Cheapest Hamiltonian cycle through `source`, or `None` if there is none.
    ///
    /// See [`algorithms::min_tsp`].
    pub fn min_tsp(&self, source: VertexId) -> Result<Option<Tour>> {
        algorithms::min_tsp(self, source)
    }

    /// Heuristic tour built from the minimum spanning tree.
    ///
    /// See [`algorithms::tsp_approx`].
    pub fn tsp_approx(&self, config: &TourConfig) -> Result<Tour> {
        algorithms::tsp_approx(self, config)
    }
}

impl<V, E, W> Graph<V, E, W> {
    /// Every Hamiltonian cycle starting and ending at `start`.
    ///
    /// See [`algorithms::all_ham_cycles`].
    pub fn all_ham_cycles(&self, start: VertexId) -> Result<Vec<Tour>> {
        algorithms::all_ham_cycles(self, start)
    }

    /// Vertices reachable from `start` following `direction`.
    ///
    /// See [`algorithms::reachable`].
    pub fn reachable(&self, start: VertexId, direction: Direction) -> Result<Vec<VertexId>> {
        algorithms::reachable(self, start, direction)
    }
}

impl<V: fmt::Display, E, W: WeightLabel> fmt::Display for Graph<V, E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertices: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "]\nedges: [")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let [u, v] = edge.endpoints();
            let (open, close) = if edge.is_directed() { ("(", ")") } else { ("{", "}") };
            write!(f, "{open}{}, {}", self.vertices[u], self.vertices[v])?;
            if let Some(weight) = edge.weight.label() {
                write!(f, ": {weight}")?;
            }
            write!(f, "{close}")?;
        }
        write!(f, "]")
    }
}
