//! Hamiltonian-cycle enumeration and the exact TSP solver built on it.
//!
//! Both are factorial in the vertex count and meant for small graphs.

use super::tour::Tour;
use super::validate_weights;
use crate::config::TourConfig;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, EdgeWeight, Graph, VertexId};
use log::{debug, info, warn};

/// Vertex count above which exhaustive search logs a warning.
const EXHAUSTIVE_WARN_THRESHOLD: usize = 12;

/// Find every Hamiltonian cycle that starts and ends at `start`.
///
/// # Parameters
/// - `graph`: The graph to search
/// - `start`: Vertex every cycle starts and ends at
///
/// # Returns
/// Vec of tours; empty when the graph has no Hamiltonian cycle. A
/// one-vertex graph yields a single tour with no edges.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` isn't a vertex.
pub fn all_ham_cycles<V, E, W>(
    graph: &Graph<V, E, W>,
    start: VertexId,
) -> Result<Vec<Tour>> {
    let mut cycles = Vec::new();
    for_each_ham_cycle(graph, start, |tour| {
        cycles.push(tour);
        Ok(())
    })?;
    Ok(cycles)
}

/// Call `visit` once for every Hamiltonian cycle through `start`.
///
/// Depth-first backtracking over partial visiting orders: the path is
/// extended only along outgoing edges to unvisited vertices and retracted
/// after each branch. A full-length path is reported only if an edge leads
/// from its last vertex back to `start`.
///
/// Parallel edges (a directed and an undirected edge between the same pair)
/// are separate branches, so each distinct edge sequence is reported once.
///
/// Errors returned by `visit` stop the search and are propagated.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` isn't a vertex.
pub fn for_each_ham_cycle<V, E, W, F>(
    graph: &Graph<V, E, W>,
    start: VertexId,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(Tour) -> Result<()>,
{
    graph.check_vertex(start)?;
    debug!(
        "Enumerating Hamiltonian cycles from vertex {start} ({} vertices)",
        graph.vertex_count()
    );

    // Every outgoing (neighbor, edge) pair; self-loops never extend a path
    let mut adjacency: Vec<Vec<(VertexId, EdgeId)>> = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertex_ids() {
        adjacency.push(
            graph
                .edges_out(vertex)?
                .filter_map(|edge| edge.other(vertex).map(|next| (next, edge.id())))
                .filter(|(next, _)| *next != vertex)
                .collect(),
        );
    }

    let mut path = vec![start];
    let mut path_edges = Vec::with_capacity(adjacency.len());
    let mut visited = vec![false; adjacency.len()];
    visited[start] = true;

    extend_cycles(
        &adjacency,
        &mut path,
        &mut path_edges,
        &mut visited,
        &mut visit,
    )
}

/// Recursive helper for cycle enumeration
fn extend_cycles<F>(
    adjacency: &[Vec<(VertexId, EdgeId)>],
    path: &mut Vec<VertexId>,
    path_edges: &mut Vec<EdgeId>,
    visited: &mut [bool],
    visit: &mut F,
) -> Result<()>
where
    F: FnMut(Tour) -> Result<()>,
{
    let start = path[0];
    let last = path[path.len() - 1];

    if path.len() == adjacency.len() {
        if path.len() == 1 {
            return visit(Tour::new(path.clone(), Vec::new()));
        }
        // Only a path that can return to the start is a cycle
        for &(next, closing) in &adjacency[last] {
            if next != start {
                continue;
            }
            let mut edges = path_edges.clone();
            edges.push(closing);
            visit(Tour::new(path.clone(), edges))?;
        }
        return Ok(());
    }

    for &(next, edge_id) in &adjacency[last] {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        path.push(next);
        path_edges.push(edge_id);

        extend_cycles(adjacency, path, path_edges, visited, visit)?;

        path_edges.pop();
        path.pop();
        visited[next] = false;
    }

    Ok(())
}

/// Find the cheapest Hamiltonian cycle through `source`.
///
/// Uses the default [`TourConfig`] (no size limit).
///
/// # Returns
/// The minimum-cost tour (the first one found on ties), or `None` if no
/// Hamiltonian cycle exists.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `source` isn't a vertex and
/// [`GraphError::InvalidWeight`] if any edge weight is negative or NaN.
pub fn min_tsp<V, E, W: EdgeWeight>(
    graph: &Graph<V, E, W>,
    source: VertexId,
) -> Result<Option<Tour>> {
    min_tsp_with_config(graph, source, &TourConfig::default())
}

/// Find the cheapest Hamiltonian cycle through `source`, honoring
/// [`TourConfig::max_exact_vertices`].
///
/// # Errors
///
/// - [`GraphError::VertexNotFound`] if `source` isn't a vertex
/// - [`GraphError::InvalidWeight`] if any edge weight is negative or NaN
/// - [`GraphError::TooLarge`] if the graph exceeds the configured limit
pub fn min_tsp_with_config<V, E, W: EdgeWeight>(
    graph: &Graph<V, E, W>,
    source: VertexId,
    config: &TourConfig,
) -> Result<Option<Tour>> {
    graph.check_vertex(source)?;
    validate_weights(graph)?;

    let vertices = graph.vertex_count();
    if let Some(limit) = config.max_exact_vertices {
        if vertices > limit {
            return Err(GraphError::TooLarge { vertices, limit });
        }
    }
    if vertices > EXHAUSTIVE_WARN_THRESHOLD {
        warn!("Exhaustive TSP over {vertices} vertices; this may take a very long time");
    }

    let mut best: Option<(Tour, f64)> = None;
    let mut examined = 0usize;
    for_each_ham_cycle(graph, source, |tour| {
        examined += 1;
        let cost = tour.cost(graph)?;
        if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
            best = Some((tour, cost));
        }
        Ok(())
    })?;

    match &best {
        Some((_, cost)) => info!("Exact TSP: best cost {cost} among {examined} cycles"),
        None => info!("Exact TSP: no Hamiltonian cycle through vertex {source}"),
    }
    Ok(best.map(|(tour, _)| tour))
}
