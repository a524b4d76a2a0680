//! Directed graph construction and neighbor lookup
//!
//! Provides the adjacency structure the algorithms operate on:
//! - `DirectedGraph`: a vertex -> neighbor-set adjacency map
//! - `traversal`: breadth-first and depth-first visit orders
//! - `search`: path finding between two vertices

pub mod search;
pub mod traversal;

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{LineageError, Result};

pub use search::{find_path, find_path_recursive, shortest_path};
pub use traversal::{breadth_first, depth_first, depth_first_recursive};

/// Bound required of vertex identifiers.
///
/// Satisfied by integers and any other cheaply clonable, hashable,
/// totally ordered key type. Blanket-implemented; never implement by hand.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VertexId for T {}

/// A directed graph stored as a mapping from vertex id to the set of
/// ids reachable along one outgoing edge.
///
/// Vertices must be added before edges that mention them; an edge whose
/// endpoint is missing is reported and dropped rather than failing the
/// caller's construction loop. There are no deletion operations: a graph
/// is built up and then queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<V: VertexId> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> DirectedGraph<V> {
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Add a vertex with an empty neighbor set.
    ///
    /// Idempotent: re-adding an existing vertex leaves its neighbor set
    /// untouched.
    pub fn add_vertex(&mut self, id: V) {
        self.adjacency.entry(id).or_default();
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already exist; otherwise the edge is reported
    /// at warn level and dropped, and the graph is left unchanged. Adding
    /// the same edge twice is a no-op.
    pub fn add_edge(&mut self, from: V, to: V) {
        if !self.adjacency.contains_key(&from) || !self.adjacency.contains_key(&to) {
            tracing::warn!(?from, ?to, "no vertex found, edge dropped");
            return;
        }
        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to);
        }
    }

    /// Get the neighbor set of a vertex, failing loudly on an unknown id.
    ///
    /// This is the strict lookup for callers holding ids from outside the
    /// graph; traversal code uses [`DirectedGraph::adjacent`] instead.
    pub fn neighbors(&self, id: &V) -> Result<&HashSet<V>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| LineageError::vertex_not_found(id))
    }

    /// Iterate the neighbors of a vertex, yielding nothing for an unknown
    /// id.
    ///
    /// Lenient counterpart of [`DirectedGraph::neighbors`]: ids that came
    /// out of this graph's own adjacency data are always present, so
    /// traversal loops use this without re-validating every hop.
    pub fn adjacent<'a>(&'a self, id: &V) -> impl Iterator<Item = &'a V> {
        self.adjacency.get(id).into_iter().flatten()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterate all vertex ids, in no defined order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: VertexId> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
