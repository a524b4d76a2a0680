//! Lineage Core Library
//!
//! In-memory directed graph with breadth-first and depth-first traversal,
//! path search, and earliest-ancestor resolution.

pub mod ancestry;
pub mod error;
pub mod graph;
pub mod logging;
