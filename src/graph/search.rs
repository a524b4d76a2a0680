//! Path search between two vertices
//!
//! Queue and stack entries are whole paths, not bare vertices: extending a
//! path clones it, so sibling branches of the search never observe each
//! other's extensions. "No path" is an ordinary `None`, not an error.

use std::collections::{HashSet, VecDeque};

use super::{DirectedGraph, VertexId};

#[cfg(test)]
mod tests;

/// Find a shortest path from `start` to `destination` by edge count.
///
/// Breadth-first over paths: paths are dequeued in non-decreasing length
/// order, so the first path reaching the destination is shortest. Returns
/// `None` when the destination is unreachable.
#[tracing::instrument(skip(graph))]
pub fn shortest_path<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: V,
    destination: V,
) -> Option<Vec<V>> {
    let mut queue: VecDeque<Vec<V>> = VecDeque::from([vec![start]]);
    let mut visited: HashSet<V> = HashSet::new();

    while let Some(path) = queue.pop_front() {
        let Some(last) = path.last().cloned() else {
            continue;
        };

        if visited.insert(last.clone()) {
            if last == destination {
                return Some(path);
            }
            for neighbor in graph.adjacent(&last) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                queue.push_back(extended);
            }
        }
    }

    None
}

/// Find some path from `start` to `destination`.
///
/// Same structure as [`shortest_path`] with a LIFO stack: the first path
/// the depth-first exploration order reaches is returned, with no length
/// guarantee. Agrees with [`shortest_path`] on reachability.
#[tracing::instrument(skip(graph))]
pub fn find_path<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: V,
    destination: V,
) -> Option<Vec<V>> {
    let mut stack: Vec<Vec<V>> = vec![vec![start]];
    let mut visited: HashSet<V> = HashSet::new();

    while let Some(path) = stack.pop() {
        let Some(last) = path.last().cloned() else {
            continue;
        };

        if visited.insert(last.clone()) {
            if last == destination {
                return Some(path);
            }
            for neighbor in graph.adjacent(&last) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push(extended);
            }
        }
    }

    None
}

/// Find some path from `start` to `destination` using explicit recursion.
///
/// The visited set is shared across recursive branches; the path itself
/// lives on the call stack and is assembled front-to-back on the way out.
/// A sub-path is accepted only when it is non-empty and contains the
/// destination; a recursive return missing the destination falls through
/// to the next neighbor.
#[tracing::instrument(skip(graph))]
pub fn find_path_recursive<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: V,
    destination: V,
) -> Option<Vec<V>> {
    let mut visited = HashSet::new();
    search(graph, start, &destination, &mut visited)
}

fn search<V: VertexId>(
    graph: &DirectedGraph<V>,
    vertex: V,
    destination: &V,
    visited: &mut HashSet<V>,
) -> Option<Vec<V>> {
    if visited.contains(&vertex) {
        return None;
    }
    visited.insert(vertex.clone());

    if vertex == *destination {
        return Some(vec![vertex]);
    }

    for neighbor in graph.adjacent(&vertex) {
        let neighbor = neighbor.clone();
        if let Some(sub) = search(graph, neighbor, destination, visited) {
            if !sub.is_empty() && sub.contains(destination) {
                let mut path = Vec::with_capacity(sub.len() + 1);
                path.push(vertex);
                path.extend(sub);
                return Some(path);
            }
        }
    }

    None
}
