//! Approximate TSP: a randomized preorder walk of the minimum spanning tree.
//!
//! On complete graphs whose weights obey the triangle inequality the tour
//! costs at most twice the optimum. An optional 2-opt pass tightens it.

use super::mst::minimum_spanning_tree_from;
use super::tour::Tour;
use crate::config::TourConfig;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeWeight, Graph, VertexId};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Build a heuristic tour from `config.anchor`.
///
/// Randomness comes from `config.seed` when set (reproducible tours) and
/// from OS entropy otherwise.
///
/// # Errors
///
/// See [`tsp_approx_with_rng`].
pub fn tsp_approx<V, E, W: EdgeWeight>(
    graph: &Graph<V, E, W>,
    config: &TourConfig,
) -> Result<Tour> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tsp_approx_with_rng(graph, config, &mut rng)
}

/// Build a heuristic tour from `config.anchor` using the caller's RNG.
///
/// 1. Grow a minimum spanning tree from the anchor.
/// 2. Walk it depth-first with an explicit stack, pushing each vertex's
///    unvisited tree neighbors in shuffled order.
/// 3. Optionally apply up to `config.improvement_passes` rounds of 2-opt
///    (only on fully undirected graphs, the anchor stays first).
/// 4. Close the visiting order into a tour.
///
/// `config.seed` is ignored here; `rng` is the only source of randomness.
///
/// # Errors
///
/// - [`GraphError::VertexNotFound`] if the anchor isn't a vertex
/// - [`GraphError::InvalidWeight`] if any weight is negative or NaN
/// - [`GraphError::Disconnected`] if the tree doesn't reach every vertex
/// - [`GraphError::MissingTourEdge`] if consecutive vertices of the walk
///   aren't joined by an edge (the graph isn't complete)
pub fn tsp_approx_with_rng<V, E, W, R>(
    graph: &Graph<V, E, W>,
    config: &TourConfig,
    rng: &mut R,
) -> Result<Tour>
where
    W: EdgeWeight,
    R: Rng + ?Sized,
{
    let anchor = config.anchor;
    graph.check_vertex(anchor)?;
    let tree = minimum_spanning_tree_from(graph, anchor)?;

    let n = graph.vertex_count();
    let mut children: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    for &edge_id in tree.edges() {
        let edge = graph.edge(edge_id)?;
        for endpoint in edge.endpoints() {
            if let Some(other) = edge.other(endpoint) {
                if edge.leaves(endpoint) {
                    children[endpoint].push(other);
                }
            }
        }
    }

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut stack = vec![anchor];
    visited[anchor] = true;

    while let Some(current) = stack.pop() {
        order.push(current);
        let mut next: Vec<VertexId> = children[current]
            .iter()
            .copied()
            .filter(|vertex| !visited[*vertex])
            .collect();
        next.shuffle(rng);
        for vertex in next {
            visited[vertex] = true;
            stack.push(vertex);
        }
    }

    if order.len() < n {
        return Err(GraphError::Disconnected {
            reached: order.len(),
            total: n,
        });
    }

    if config.improvement_passes > 0 {
        if graph.edges().all(|edge| !edge.is_directed()) {
            two_opt(graph, &mut order, config.improvement_passes);
        } else {
            debug!("Skipping 2-opt: graph has directed edges");
        }
    }

    let tour = Tour::from_order(graph, order)?;
    info!(
        "Approximate tour from vertex {anchor}: {} vertices, tree weight {}",
        tour.vertex_count(),
        tree.total_weight()
    );
    Ok(tour)
}

/// Reverse tour segments while that shortens the tour. `order[0]` never moves.
fn two_opt<V, E, W: EdgeWeight>(graph: &Graph<V, E, W>, order: &mut [VertexId], passes: usize) {
    let n = order.len();
    if n < 4 {
        return;
    }
    let weight = |a: VertexId, b: VertexId| graph.get_edge(a, b).map(|edge| edge.cost());

    for pass in 0..passes {
        let mut improved = false;
        for i in 0..n - 2 {
            for j in i + 2..n {
                // Edges sharing a vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = (order[i], order[i + 1]);
                let (c, d) = (order[j], order[(j + 1) % n]);
                let (Some(ab), Some(cd), Some(ac), Some(bd)) =
                    (weight(a, b), weight(c, d), weight(a, c), weight(b, d))
                else {
                    continue;
                };
                if ac + bd < ab + cd - IMPROVEMENT_EPSILON {
                    order[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
        if !improved {
            debug!("2-opt converged after {} passes", pass + 1);
            break;
        }
    }
}
