use pretty_assertions::assert_eq;

use crate::graph::search::*;
use crate::graph::DirectedGraph;

/// The 7-vertex reference graph:
/// 1 -> {2}, 2 -> {3, 4}, 3 -> {5}, 4 -> {6, 7}, 5 -> {3}, 6 -> {3},
/// 7 -> {1, 6}
fn reference_graph() -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::new();
    for id in 1..=7 {
        graph.add_vertex(id);
    }
    for (from, to) in [
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ] {
        graph.add_edge(from, to);
    }
    graph
}

/// Test that shortest_path returns the unique shortest path in the
/// reference graph
#[test]
fn test_shortest_path_reference_graph() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, 1, 6), Some(vec![1, 2, 4, 6]));
}

/// Test that find_path returns one of the valid depth-first paths
#[test]
fn test_find_path_reference_graph() {
    let graph = reference_graph();
    let path = find_path(&graph, 1, 6);

    assert!(
        path == Some(vec![1, 2, 4, 6]) || path == Some(vec![1, 2, 4, 7, 6]),
        "not a valid path: {:?}",
        path
    );
}

/// Test that find_path_recursive returns one of the valid depth-first
/// paths
#[test]
fn test_find_path_recursive_reference_graph() {
    let graph = reference_graph();
    let path = find_path_recursive(&graph, 1, 6);

    assert!(
        path == Some(vec![1, 2, 4, 6]) || path == Some(vec![1, 2, 4, 7, 6]),
        "not a valid path: {:?}",
        path
    );
}

/// Test that start == destination yields the singleton path
#[test]
fn test_path_to_self_is_singleton() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, 3, 3), Some(vec![3]));
    assert_eq!(find_path(&graph, 3, 3), Some(vec![3]));
    assert_eq!(find_path_recursive(&graph, 3, 3), Some(vec![3]));
}

/// Test that all three searches agree the destination is unreachable
#[test]
fn test_unreachable_destination_is_none() {
    // From 5 only {3, 5} are reachable
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, 5, 7), None);
    assert_eq!(find_path(&graph, 5, 7), None);
    assert_eq!(find_path_recursive(&graph, 5, 7), None);
}

/// Test that a returned path always runs from start to destination
#[test]
fn test_path_endpoints() {
    let graph = reference_graph();
    for (start, destination) in [(1, 6), (7, 5), (2, 3), (4, 5)] {
        for path in [
            shortest_path(&graph, start, destination),
            find_path(&graph, start, destination),
            find_path_recursive(&graph, start, destination),
        ] {
            let path = path.unwrap();
            assert_eq!(*path.first().unwrap(), start);
            assert_eq!(*path.last().unwrap(), destination);
        }
    }
}

/// Test that the recursive search falls through a dead-end branch and
/// keeps exploring the remaining neighbors
#[test]
fn test_find_path_recursive_dead_end_falls_through() {
    let mut graph = DirectedGraph::new();
    for id in [1, 2, 3, 4, 6] {
        graph.add_vertex(id);
    }
    graph.add_edge(1, 2);
    graph.add_edge(2, 3); // dead end
    graph.add_edge(2, 4);
    graph.add_edge(4, 6);

    assert_eq!(find_path_recursive(&graph, 1, 6), Some(vec![1, 2, 4, 6]));
}

/// Test that the recursive search still finds the destination when an
/// earlier branch has already claimed intermediate vertices in the shared
/// visited set
#[test]
fn test_find_path_recursive_shared_visited_across_branches() {
    // 1 -> {2, 3}, 2 -> {3}, 3 -> {4}: whichever branch runs first marks
    // 3 visited; the other must return None for it and fall through.
    let mut graph = DirectedGraph::new();
    for id in 1..=4 {
        graph.add_vertex(id);
    }
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(2, 3);
    graph.add_edge(3, 4);

    let path = find_path_recursive(&graph, 1, 4).unwrap();
    assert_eq!(*path.first().unwrap(), 1);
    assert_eq!(*path.last().unwrap(), 4);
}

/// Test that search terminates and finds a path on a cyclic graph
#[test]
fn test_search_terminates_on_cycle() {
    let mut graph = DirectedGraph::new();
    for id in 1..=3 {
        graph.add_vertex(id);
    }
    graph.add_edge(1, 2);
    graph.add_edge(2, 1);
    graph.add_edge(2, 3);

    assert_eq!(shortest_path(&graph, 1, 3), Some(vec![1, 2, 3]));
    assert_eq!(find_path(&graph, 1, 3), Some(vec![1, 2, 3]));
    assert_eq!(find_path_recursive(&graph, 1, 3), Some(vec![1, 2, 3]));
}

/// Test that shortest_path prefers the fewer-edge route when a longer one
/// also exists
#[test]
fn test_shortest_path_prefers_fewer_edges() {
    // 1 -> 5 directly, and 1 -> 2 -> 3 -> 4 -> 5 the long way
    let mut graph = DirectedGraph::new();
    for id in 1..=5 {
        graph.add_vertex(id);
    }
    graph.add_edge(1, 5);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 4);
    graph.add_edge(4, 5);

    assert_eq!(shortest_path(&graph, 1, 5), Some(vec![1, 5]));
}
