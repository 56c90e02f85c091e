//! Unit tests for Hamiltonian cycles and TSP solvers
//!
//! Tests cover:
//! - Cycle enumeration: every vertex once, n edges, closing edge required
//! - Exact TSP: optimal among all cycles, parallel edges, None without a cycle
//! - Approximate TSP: valid tours, seed reproducibility, 2-opt, error cases
//! - Invalid (negative or NaN) weights rejected by both solvers

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tourgraph::graph::algorithms::{for_each_ham_cycle, min_tsp_with_config, tsp_approx_with_rng};
use tourgraph::{Graph, GraphError, TourConfig};

type Weighted = Graph<(), (), f64>;

// Points on a small integer grid; weights are Euclidean distances
const POINTS: [(f64, f64); 7] = [
    (0.0, 0.0),
    (3.0, 0.0),
    (3.0, 4.0),
    (0.0, 4.0),
    (1.0, 2.0),
    (5.0, 2.0),
    (2.0, 6.0),
];

// Helper to create a complete Euclidean graph over the first `n` points
fn create_euclidean(n: usize) -> tourgraph::Result<Weighted> {
    let mut graph = Graph::with_vertices(n);
    for u in 0..n {
        for v in u + 1..n {
            let (dx, dy) = (POINTS[u].0 - POINTS[v].0, POINTS[u].1 - POINTS[v].1);
            graph.add_undirected_edge(u, v, (dx * dx + dy * dy).sqrt())?;
        }
    }
    Ok(graph)
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[test]
fn test_complete_graph_cycle_count() {
    for n in 3..=6 {
        let graph = create_euclidean(n).unwrap();
        let cycles = graph.all_ham_cycles(0).unwrap();
        // Both orientations of each cycle are enumerated
        assert_eq!(cycles.len(), factorial(n - 1));
        for cycle in &cycles {
            assert!(cycle.is_hamiltonian_cycle(&graph));
            assert_eq!(cycle.start(), Some(0));
            assert_eq!(cycle.edge_count(), n);
            let distinct: HashSet<_> = cycle.vertices().iter().collect();
            assert_eq!(distinct.len(), n);
        }
    }
}

#[test]
fn test_cycles_need_closing_edge() {
    // A star has Hamiltonian paths from a leaf but no cycle
    let mut graph: Weighted = Graph::with_vertices(4);
    graph.add_undirected_edge(0, 1, 1.0).unwrap();
    graph.add_undirected_edge(0, 2, 1.0).unwrap();
    graph.add_undirected_edge(0, 3, 1.0).unwrap();

    assert!(graph.all_ham_cycles(1).unwrap().is_empty());
    assert_eq!(graph.min_tsp(1).unwrap(), None);
}

#[test]
fn test_single_and_two_vertex_boundaries() {
    let single: Weighted = Graph::with_vertices(1);
    let cycles = single.all_ham_cycles(0).unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].edge_count(), 0);
    assert_eq!(single.min_tsp(0).unwrap().unwrap().cost(&single).unwrap(), 0.0);

    // Two vertices: the lone undirected edge is walked there and back
    let mut pair: Weighted = Graph::with_vertices(2);
    let edge = pair.add_undirected_edge(0, 1, 2.5).unwrap();
    let tour = pair.min_tsp(0).unwrap().unwrap();
    assert_eq!(tour.edges(), &[edge, edge]);
    assert_eq!(tour.cost(&pair).unwrap(), 5.0);
}

#[test]
fn test_min_tsp_is_minimum_over_cycles() {
    let graph = create_euclidean(6).unwrap();
    let best = graph.min_tsp(0).unwrap().unwrap();
    let best_cost = best.cost(&graph).unwrap();

    assert!(best.is_hamiltonian_cycle(&graph));
    let mut count = 0;
    for_each_ham_cycle(&graph, 0, |cycle| {
        count += 1;
        assert!(best_cost <= cycle.cost(&graph)?);
        Ok(())
    })
    .unwrap();
    assert_eq!(count, factorial(5));
}

#[test]
fn test_min_tsp_cost_independent_of_source() {
    let graph = create_euclidean(5).unwrap();
    let expected = graph.min_tsp(0).unwrap().unwrap().cost(&graph).unwrap();
    for source in 1..5 {
        let tour = graph.min_tsp(source).unwrap().unwrap();
        assert_eq!(tour.start(), Some(source));
        assert!((tour.cost(&graph).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_min_tsp_directed_graph() {
    // Only one orientation of the square exists
    let mut graph: Weighted = Graph::with_vertices(4);
    graph.add_directed_edge(0, 1, 1.0).unwrap();
    graph.add_directed_edge(1, 2, 1.0).unwrap();
    graph.add_directed_edge(2, 3, 1.0).unwrap();
    graph.add_directed_edge(3, 0, 1.0).unwrap();
    graph.add_directed_edge(0, 2, 1.0).unwrap();

    let cycles = graph.all_ham_cycles(0).unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].vertices(), &[0, 1, 2, 3]);
}

#[test]
fn test_min_tsp_size_limit() {
    let graph = create_euclidean(6).unwrap();
    let config = TourConfig::default().with_max_exact_vertices(5);
    assert_eq!(
        min_tsp_with_config(&graph, 0, &config),
        Err(GraphError::TooLarge {
            vertices: 6,
            limit: 5
        })
    );
    assert!(min_tsp_with_config(&graph, 0, &config.with_max_exact_vertices(6)).is_ok());
}

#[test]
fn test_tsp_approx_valid_and_bounded() {
    let graph = create_euclidean(7).unwrap();
    let optimum = graph.min_tsp(0).unwrap().unwrap().cost(&graph).unwrap();
    let tree_weight = graph.minimum_spanning_tree().unwrap().total_weight();

    for seed in 0..20 {
        let tour = graph.tsp_approx(&TourConfig::seeded(seed)).unwrap();
        let cost = tour.cost(&graph).unwrap();
        assert!(tour.is_hamiltonian_cycle(&graph));
        assert_eq!(tour.start(), Some(0));
        assert!(cost >= optimum - 1e-9);
        // Metric weights: preorder walk costs at most twice the tree
        assert!(cost <= 2.0 * tree_weight + 1e-9);
    }
}

#[test]
fn test_tsp_approx_reproducible_with_seed() {
    let graph = create_euclidean(7).unwrap();
    let config = TourConfig::seeded(1234).with_anchor(3);
    let first = graph.tsp_approx(&config).unwrap();
    let second = graph.tsp_approx(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.start(), Some(3));

    // Caller-owned RNG with the same seed gives the same tour
    let mut rng = StdRng::seed_from_u64(1234);
    let third = tsp_approx_with_rng(&graph, &config, &mut rng).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_tsp_approx_improvement_never_hurts() {
    let graph = create_euclidean(7).unwrap();
    for seed in 0..10 {
        let plain = graph.tsp_approx(&TourConfig::seeded(seed)).unwrap();
        let improved = graph
            .tsp_approx(&TourConfig::improved().with_seed(seed))
            .unwrap();
        assert!(improved.is_hamiltonian_cycle(&graph));
        assert_eq!(improved.start(), Some(0));
        assert!(improved.cost(&graph).unwrap() <= plain.cost(&graph).unwrap() + 1e-9);
    }
}

#[test]
fn test_tsp_approx_requires_complete_graph() {
    // Path 0 - 1 - 2 - 3 plus a star at 1: the preorder walk must jump
    let mut graph: Weighted = Graph::with_vertices(4);
    graph.add_undirected_edge(0, 1, 1.0).unwrap();
    graph.add_undirected_edge(1, 2, 1.0).unwrap();
    graph.add_undirected_edge(1, 3, 1.0).unwrap();

    assert!(matches!(
        graph.tsp_approx(&TourConfig::seeded(3)),
        Err(GraphError::MissingTourEdge { .. })
    ));
}

#[test]
fn test_tsp_approx_errors() {
    let mut graph: Weighted = Graph::with_vertices(3);
    graph.add_undirected_edge(0, 1, 1.0).unwrap();

    assert_eq!(
        graph.tsp_approx(&TourConfig::seeded(0)),
        Err(GraphError::Disconnected {
            reached: 2,
            total: 3
        })
    );
    assert_eq!(
        graph.tsp_approx(&TourConfig::seeded(0).with_anchor(9)),
        Err(GraphError::VertexNotFound { vertex_id: 9 })
    );
}

#[test]
fn test_min_tsp_rejects_invalid_weights() {
    // NaN on the first edge of the first enumerated cycle
    let mut graph = create_euclidean(4).unwrap();
    graph.edge_mut(0).unwrap().weight = f64::NAN;
    assert!(matches!(
        graph.min_tsp(0),
        Err(GraphError::InvalidWeight { edge_id: 0, .. })
    ));

    let mut triangle: Weighted = Graph::with_vertices(3);
    let negative = triangle.add_undirected_edge(0, 1, -5.0).unwrap();
    triangle.add_undirected_edge(1, 2, 1.0).unwrap();
    triangle.add_undirected_edge(2, 0, 1.0).unwrap();
    assert_eq!(
        triangle.min_tsp(0),
        Err(GraphError::InvalidWeight {
            edge_id: negative,
            weight: -5.0
        })
    );
    assert_eq!(
        triangle.min_tsp(7),
        Err(GraphError::VertexNotFound { vertex_id: 7 })
    );
}

#[test]
fn test_min_tsp_uses_cheapest_parallel_edge() {
    // Directed 0 -> 1 and 1 -> 0 are expensive; the undirected {0, 1} is cheap
    let mut graph: Weighted = Graph::with_vertices(3);
    graph.add_directed_edge(0, 1, 100.0).unwrap();
    graph.add_directed_edge(1, 0, 100.0).unwrap();
    let cheap = graph.add_undirected_edge(0, 1, 1.0).unwrap();
    graph.add_undirected_edge(1, 2, 1.0).unwrap();
    graph.add_undirected_edge(2, 0, 1.0).unwrap();

    let tour = graph.min_tsp(0).unwrap().unwrap();
    assert_eq!(tour.cost(&graph).unwrap(), 3.0);
    assert!(tour.edges().contains(&cheap));
    assert!(tour.is_hamiltonian_cycle(&graph));
}

#[test]
fn test_tsp_approx_rejects_invalid_weights() {
    let mut graph = create_euclidean(5).unwrap();
    graph.edge_mut(3).unwrap().weight = -1.0;
    assert_eq!(
        graph.tsp_approx(&TourConfig::seeded(0)),
        Err(GraphError::InvalidWeight {
            edge_id: 3,
            weight: -1.0
        })
    );

    graph.edge_mut(3).unwrap().weight = f64::NAN;
    assert!(matches!(
        graph.tsp_approx(&TourConfig::improved().with_seed(0)),
        Err(GraphError::InvalidWeight { edge_id: 3, .. })
    ));
}

#[test]
fn test_tsp_approx_skips_two_opt_with_directed_edges() {
    // Complete undirected graph plus one expensive directed shortcut
    let mut graph = create_euclidean(7).unwrap();
    graph.add_directed_edge(0, 2, 100.0).unwrap();

    for seed in 0..10 {
        let plain = graph.tsp_approx(&TourConfig::seeded(seed)).unwrap();
        let improved = graph
            .tsp_approx(&TourConfig::improved().with_seed(seed))
            .unwrap();
        // No reordering happens, so the same seed gives the same tour
        assert_eq!(improved, plain);
        assert!(improved.is_hamiltonian_cycle(&graph));
        assert!(improved.cost(&graph).unwrap() < 100.0);
    }
}
