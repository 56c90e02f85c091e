//! Breadth-first reachability.
//!
//! Prim's tree and the approximate tour only cover the start vertex's
//! component; these helpers let callers check connectivity up front.

use crate::error::Result;
use crate::graph::{Direction, Graph, VertexId};
use std::collections::VecDeque;

/// Breadth-First Search traversal from a starting vertex.
///
/// Returns all reachable vertices within the specified depth limit, in
/// visiting order.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting vertex id
/// - `direction`: Follow outgoing, incoming or all edges
/// - `max_depth`: Optional maximum depth (None for unlimited)
///
/// # Returns
/// Vec of reachable vertex ids (excluding the start vertex)
pub fn bfs<V, E, W>(
    graph: &Graph<V, E, W>,
    start: VertexId,
    direction: Direction,
    max_depth: Option<usize>,
) -> Result<Vec<VertexId>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited[start] = true;
    queue.push_back((start, 0)); // (vertex_id, depth)

    while let Some((current, depth)) = queue.pop_front() {
        if let Some(max) = max_depth {
            if depth >= max {
                continue;
            }
        }

        for neighbor in graph.neighbors(current, direction)? {
            if !visited[neighbor] {
                visited[neighbor] = true;
                result.push(neighbor);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(result)
}

/// Every vertex reachable from `start` (including `start`) following `direction`.
pub fn reachable<V, E, W>(
    graph: &Graph<V, E, W>,
    start: VertexId,
    direction: Direction,
) -> Result<Vec<VertexId>> {
    let mut result = vec![start];
    result.extend(bfs(graph, start, direction, None)?);
    Ok(result)
}

/// Whether every vertex is reachable from the first one ignoring direction.
///
/// The empty graph counts as connected.
pub fn is_connected<V, E, W>(graph: &Graph<V, E, W>) -> Result<bool> {
    if graph.is_empty() {
        return Ok(true);
    }
    Ok(reachable(graph, 0, Direction::Both)?.len() == graph.vertex_count())
}
