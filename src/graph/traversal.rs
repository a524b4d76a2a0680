//! Breadth-first and depth-first traversal
//!
//! The iterative traversals are lazy iterators over vertex ids: each visits
//! every vertex reachable from the start exactly once and then ends. A
//! traversal is finite and not restartable mid-iteration; invoke it again
//! to reproduce the sequence with a fresh visited set.

use std::collections::{HashSet, VecDeque};

use super::{DirectedGraph, VertexId};


/// Lazy breadth-first visit order from a starting vertex.
pub struct BreadthFirst<'g, V: VertexId> {
    graph: &'g DirectedGraph<V>,
    queue: VecDeque<V>,
    visited: HashSet<V>,
}

/// Lazy depth-first visit order from a starting vertex.
pub struct DepthFirst<'g, V: VertexId> {
    graph: &'g DirectedGraph<V>,
    stack: Vec<V>,
    visited: HashSet<V>,
}

/// Visit each vertex reachable from `start` in breadth-first order.
pub fn breadth_first<V: VertexId>(graph: &DirectedGraph<V>, start: V) -> BreadthFirst<'_, V> {
    BreadthFirst {
        graph,
        queue: VecDeque::from([start]),
        visited: HashSet::new(),
    }
}

/// Visit each vertex reachable from `start` in depth-first order.
pub fn depth_first<V: VertexId>(graph: &DirectedGraph<V>, start: V) -> DepthFirst<'_, V> {
    DepthFirst {
        graph,
        stack: vec![start],
        visited: HashSet::new(),
    }
}

impl<V: VertexId> Iterator for BreadthFirst<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        // Visited filtering happens at dequeue time, not enqueue time: a
        // vertex may sit in the queue more than once but is emitted once.
        while let Some(vertex) = self.queue.pop_front() {
            if self.visited.insert(vertex.clone()) {
                for neighbor in self.graph.adjacent(&vertex) {
                    self.queue.push_back(neighbor.clone());
                }
                return Some(vertex);
            }
        }
        None
    }
}

impl<V: VertexId> Iterator for DepthFirst<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex.clone()) {
                for neighbor in self.graph.adjacent(&vertex) {
                    self.stack.push(neighbor.clone());
                }
                return Some(vertex);
            }
        }
        None
    }
}

/// Visit each vertex reachable from `start` in depth-first order, using
/// explicit recursion, and collect the visit order.
///
/// The visited set is shared across recursive branches so each vertex is
/// entered at most once; that sharing is what bounds the recursion on
/// cyclic graphs. Recursion depth is proportional to the longest simple
/// path from `start`; prefer [`depth_first`] for very deep graphs.
#[tracing::instrument(skip(graph))]
pub fn depth_first_recursive<V: VertexId>(graph: &DirectedGraph<V>, start: V) -> Vec<V> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

fn visit<V: VertexId>(
    graph: &DirectedGraph<V>,
    vertex: V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) {
    if !visited.insert(vertex.clone()) {
        return;
    }
    order.push(vertex.clone());
    for neighbor in graph.adjacent(&vertex) {
        visit(graph, neighbor.clone(), visited, order);
    }
}
