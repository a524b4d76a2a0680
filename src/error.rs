//! Error types for lineage
//!
//! The only hard failure the crate produces is a strict lookup on a vertex
//! that was never added. "No path" and "no ancestor" are ordinary return
//! values, not errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineageError>;

/// Errors that can occur during lineage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },
}

impl LineageError {
    /// Create a vertex-not-found error from any debug-printable vertex id
    pub fn vertex_not_found(id: impl std::fmt::Debug) -> Self {
        LineageError::VertexNotFound {
            id: format!("{:?}", id),
        }
    }
}
