//! Earliest-ancestor resolution over parent/child pairs
//!
//! Given a flat list of (parent, child) relationships, resolves the most
//! distant ancestor of a vertex: the far endpoint of the longest chain of
//! parents reachable from it, with ties between equally long chains broken
//! toward the numerically smaller id.

use std::collections::VecDeque;

use crate::graph::DirectedGraph;


/// Sentinel returned when the queried vertex has no recorded ancestors.
///
/// Only valid because ids are non-negative in this domain; a signed id
/// domain would need an `Option` return instead.
pub const NO_ANCESTOR: i64 = -1;

/// Resolve the most distant ancestor of `starting_vertex`.
///
/// Each pair `(parent, child)` contributes both endpoints as vertices and
/// one edge from the child to its parent, so forward traversal from the
/// query vertex walks toward its ancestors and reaches only them.
///
/// Breadth-first over whole paths, keeping the longest chain seen so far;
/// among chains of equal length the numerically smaller endpoint wins.
/// Returns [`NO_ANCESTOR`] when the vertex has no ancestors.
///
/// The input relation is assumed to be acyclic; that precondition is not
/// verified, and cyclic input does not terminate.
#[tracing::instrument(skip(pairs), fields(pairs = pairs.len()))]
pub fn earliest_ancestor(pairs: &[(i64, i64)], starting_vertex: i64) -> i64 {
    let mut graph = DirectedGraph::new();
    for &(parent, child) in pairs {
        graph.add_vertex(parent);
        graph.add_vertex(child);
        graph.add_edge(child, parent);
    }

    let mut queue: VecDeque<Vec<i64>> = VecDeque::from([vec![starting_vertex]]);
    let mut longest_length: usize = 1;
    let mut earliest = NO_ANCESTOR;

    // No visited set: the relation is a forest, and the same vertex may
    // legitimately close two chains of different lengths.
    while let Some(path) = queue.pop_front() {
        let Some(&vertex) = path.last() else {
            continue;
        };

        // The initial path has length 1 and a non-negative endpoint, so
        // it can never displace the sentinel.
        if (path.len() >= longest_length && vertex < earliest) || path.len() > longest_length {
            earliest = vertex;
            longest_length = path.len();
        }

        for &parent in graph.adjacent(&vertex) {
            let mut extended = path.clone();
            extended.push(parent);
            queue.push_back(extended);
        }
    }

    earliest
}
