//! Graph-engine error type.

use thiserror::Error;

/// Errors produced by `sr-graph`.
///
/// Vertices are rendered with their `Debug` form so the error type stays
/// independent of the vertex type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("{0} cannot be used as a vertex key")]
    InvalidKey(String),

    #[error("vertex {0} not found in graph")]
    VertexNotFound(String),

    #[error("no route from {from} to {to}")]
    RouteNotFound { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
