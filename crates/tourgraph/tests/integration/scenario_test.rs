//! End-to-end scenario: a four-city road map queried through every algorithm
//!
//! ```text
//!   A --1-- B
//!   | \     | \
//!   4   3   2   5
//!   |     \ |     \
//!   C --1-- D       (B-D: 5, A-D: 3)
//! ```

use std::collections::HashSet;
use tourgraph::{Graph, TourConfig, VertexId};

type RoadMap = Graph<&'static str, &'static str, f64>;

// Helper to create the map; returns vertex ids in order A, B, C, D
fn create_road_map() -> tourgraph::Result<(RoadMap, [VertexId; 4])> {
    let mut graph = Graph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");

    graph.add_edge(a, b, false, 1.0, "ab")?;
    graph.add_edge(a, c, false, 4.0, "ac")?;
    graph.add_edge(a, d, false, 3.0, "ad")?;
    graph.add_edge(b, c, false, 2.0, "bc")?;
    graph.add_edge(b, d, false, 5.0, "bd")?;
    graph.add_edge(c, d, false, 1.0, "cd")?;

    Ok((graph, [a, b, c, d]))
}

#[test]
fn test_shortest_paths_from_a() {
    let (graph, [a, b, c, d]) = create_road_map().unwrap();
    let distances = graph.shortest_paths(a).unwrap();

    assert_eq!(distances.get(a), Some(0.0));
    assert_eq!(distances.get(b), Some(1.0));
    assert_eq!(distances.get(c), Some(3.0));
    assert_eq!(distances.get(d), Some(3.0));

    // A -> C goes through B
    let labels: Vec<_> = distances
        .path_to(c)
        .unwrap()
        .iter()
        .map(|id| graph.edge(*id).unwrap().data)
        .collect();
    assert_eq!(labels, vec!["ab", "bc"]);
}

#[test]
fn test_minimum_spanning_tree() {
    let (graph, _) = create_road_map().unwrap();
    let tree = graph.minimum_spanning_tree().unwrap();

    assert_eq!(tree.total_weight(), 4.0);
    let labels: HashSet<_> = tree
        .edges()
        .iter()
        .map(|id| graph.edge(*id).unwrap().data)
        .collect();
    assert_eq!(labels, HashSet::from(["ab", "bc", "cd"]));
}

#[test]
fn test_hamiltonian_cycles() {
    let (graph, [a, ..]) = create_road_map().unwrap();
    let cycles = graph.all_ham_cycles(a).unwrap();

    // Three distinct cycles, each found in both orientations
    assert_eq!(cycles.len(), 6);
    let distinct: HashSet<Vec<_>> = cycles
        .iter()
        .map(|cycle| {
            let mut edges = cycle.edges().to_vec();
            edges.sort_unstable();
            edges
        })
        .collect();
    assert_eq!(distinct.len(), 3);

    let mut costs: Vec<f64> = cycles.iter().map(|c| c.cost(&graph).unwrap()).collect();
    costs.sort_by(f64::total_cmp);
    assert_eq!(costs, vec![7.0, 7.0, 11.0, 11.0, 14.0, 14.0]);
}

#[test]
fn test_exact_tour() {
    let (graph, [a, b, c, d]) = create_road_map().unwrap();
    let tour = graph.min_tsp(a).unwrap().unwrap();

    assert_eq!(tour.cost(&graph).unwrap(), 7.0);
    // First optimal cycle found in edge insertion order
    assert_eq!(tour.vertices(), &[a, b, c, d]);
}

#[test]
fn test_approximate_tour() {
    let (graph, [a, b, c, d]) = create_road_map().unwrap();

    // The tree is the path A-B-C-D, so every seed walks it the same way
    for seed in [0, 1, 99] {
        let tour = graph.tsp_approx(&TourConfig::seeded(seed)).unwrap();
        assert_eq!(tour.vertices(), &[a, b, c, d]);
        assert_eq!(tour.cost(&graph).unwrap(), 7.0);
    }

    let from_d = graph
        .tsp_approx(&TourConfig::seeded(5).with_anchor(d))
        .unwrap();
    assert_eq!(from_d.vertices(), &[d, c, b, a]);
}

#[test]
fn test_reversed_map_is_equivalent() {
    let (graph, [a, ..]) = create_road_map().unwrap();
    let reversed = graph.reverse();

    assert_eq!(reversed.adjacency_matrix(), graph.adjacency_matrix());
    assert_eq!(
        reversed.shortest_paths(a).unwrap(),
        graph.shortest_paths(a).unwrap()
    );
}

#[test]
fn test_results_serialize_for_reporting() {
    let (graph, [a, ..]) = create_road_map().unwrap();

    let tour = graph.min_tsp(a).unwrap().unwrap();
    let json = serde_json::to_value(&tour).unwrap();
    assert_eq!(json["vertices"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["edges"].as_array().map(Vec::len), Some(4));

    let tree = graph.minimum_spanning_tree().unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["root"], serde_json::json!(0));
    assert_eq!(json["total_weight"], serde_json::json!(4.0));
}
