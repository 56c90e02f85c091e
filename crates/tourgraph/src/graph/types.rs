//! Core graph types: vertices, edges, ids, weights and directions.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a vertex: its creation-order index in the owning graph.
pub type VertexId = usize;

/// Identifier of an edge: its creation-order index in the owning graph.
pub type EdgeId = usize;

/// Direction for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this vertex)
    Outgoing,
    /// Follow incoming edges (to this vertex)
    Incoming,
    /// Follow edges in both directions
    Both,
}

/// Weight carried by an edge that weighted algorithms can cost.
///
/// Implemented for every `Copy` type convertible into `f64` (`f64`, `f32`,
/// `u32`, `i32`, ...). Unweighted graphs use `()`, which does not implement
/// this trait, so asking for shortest paths over an unweighted graph fails
/// to compile instead of failing at runtime.
pub trait EdgeWeight: Copy {
    /// The weight as a floating point cost.
    fn cost(self) -> f64;
}

impl<T: Copy + Into<f64>> EdgeWeight for T {
    fn cost(self) -> f64 {
        self.into()
    }
}

/// Optional textual rendering of an edge weight for `Display` output.
pub trait WeightLabel {
    /// `None` when the weight has nothing to show.
    fn label(&self) -> Option<String>;
}

impl WeightLabel for () {
    fn label(&self) -> Option<String> {
        None
    }
}

macro_rules! numeric_weight_label {
    ($($ty:ty),*) => {
        $(
            impl WeightLabel for $ty {
                fn label(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

numeric_weight_label!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// A vertex in the graph.
///
/// Holds an opaque payload and the ids of every incident edge. The outgoing
/// and incoming views are derived from each edge's directedness by
/// [`Graph`](super::Graph). Vertices compare by identity, never by payload.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    id: VertexId,
    /// Caller-supplied payload
    pub data: V,
    incident: Vec<EdgeId>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, data: V) -> Self {
        Self {
            id,
            data,
            incident: Vec::new(),
        }
    }

    /// Creation-order index of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Ids of every edge touching this vertex, in insertion order.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Number of incident edges (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub(crate) fn attach(&mut self, edge_id: EdgeId) {
        self.incident.push(edge_id);
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.data)
    }
}

/// Identity of an edge for set membership: endpoints plus directedness.
///
/// Undirected keys store the smaller endpoint first so `{u, v}` and
/// `{v, u}` collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey {
    endpoints: [VertexId; 2],
    directed: bool,
}

impl EdgeKey {
    pub(crate) fn new(u: VertexId, v: VertexId, directed: bool) -> Self {
        let endpoints = if directed || u <= v { [u, v] } else { [v, u] };
        Self {
            endpoints,
            directed,
        }
    }
}

/// An edge between two vertices.
///
/// Endpoints are stored in a fixed order. For directed edges index 0 is the
/// source and index 1 the target; undirected edges ignore the order when
/// compared. Equality and hashing look only at endpoints and directedness,
/// never at the id, weight or payload.
#[derive(Debug, Clone)]
pub struct Edge<E = (), W = ()> {
    id: EdgeId,
    endpoints: [VertexId; 2],
    directed: bool,
    /// Edge weight (`()` for unweighted graphs)
    pub weight: W,
    /// Caller-supplied payload
    pub data: E,
}

/// An edge carrying a floating point weight.
pub type WeightedEdge<E = ()> = Edge<E, f64>;

impl<E, W> Edge<E, W> {
    /// Create a new edge (the id is normally assigned by the graph).
    pub fn new(id: EdgeId, u: VertexId, v: VertexId, directed: bool, weight: W, data: E) -> Self {
        Self {
            id,
            endpoints: [u, v],
            directed,
            weight,
            data,
        }
    }

    /// Creation-order index of this edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Both endpoints in storage order.
    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    /// Whether this edge is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Source of a directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UndirectedEdge`] for undirected edges.
    pub fn source(&self) -> Result<VertexId> {
        if !self.directed {
            return Err(GraphError::UndirectedEdge { edge_id: self.id });
        }
        Ok(self.endpoints[0])
    }

    /// Target of a directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UndirectedEdge`] for undirected edges.
    pub fn target(&self) -> Result<VertexId> {
        if !self.directed {
            return Err(GraphError::UndirectedEdge { edge_id: self.id });
        }
        Ok(self.endpoints[1])
    }

    /// The endpoint opposite `vertex`, or `None` if the edge doesn't touch it.
    ///
    /// A self-loop returns `vertex` itself.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        match self.endpoints {
            [u, v] if u == vertex => Some(v),
            [u, v] if v == vertex => Some(u),
            _ => None,
        }
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.endpoints.contains(&vertex)
    }

    /// Whether this edge is in `vertex`'s outgoing view.
    pub fn leaves(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.endpoints[0] == vertex
        } else {
            self.touches(vertex)
        }
    }

    /// Whether this edge is in `vertex`'s incoming view.
    pub fn enters(&self, vertex: VertexId) -> bool {
        if self.directed {
            self.endpoints[1] == vertex
        } else {
            self.touches(vertex)
        }
    }

    /// A copy with the endpoints swapped; directedness, weight and payload are kept.
    pub fn reversed(&self) -> Self
    where
        E: Clone,
        W: Clone,
    {
        Self {
            id: self.id,
            endpoints: [self.endpoints[1], self.endpoints[0]],
            directed: self.directed,
            weight: self.weight.clone(),
            data: self.data.clone(),
        }
    }

    pub(crate) fn key(&self) -> EdgeKey {
        EdgeKey::new(self.endpoints[0], self.endpoints[1], self.directed)
    }
}

impl<E, W: EdgeWeight> Edge<E, W> {
    /// The weight as a floating point cost.
    pub fn cost(&self) -> f64 {
        self.weight.cost()
    }
}

impl<E, W> PartialEq for Edge<E, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<E, W> Eq for Edge<E, W> {}

impl<E, W> Hash for Edge<E, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<E, W: WeightLabel> fmt::Display for Edge<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [u, v] = self.endpoints;
        let (open, close) = if self.directed { ("(", ")") } else { ("{", "}") };
        match self.weight.label() {
            Some(weight) => write!(f, "{open}{u}, {v}: {weight}{close}"),
            None => write!(f, "{open}{u}, {v}{close}"),
        }
    }
}
