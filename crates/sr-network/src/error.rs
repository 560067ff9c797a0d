//! Network-subsystem error type.

use thiserror::Error;

use sr_graph::GraphError;

/// Errors produced by `sr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no intersection at coordinates ({x}, {y})")]
    UnknownCoordinate { x: i64, y: i64 },

    #[error("address {0:?} not found")]
    UnknownAddress(String),

    #[error("address {0:?} is neither \"<street> NUM<n>\" nor \"AUTOVIA A-<n>\"")]
    AddressFormat(String),

    #[error("the street network has no intersections")]
    EmptyNetwork,

    #[error("record parse error: {0}")]
    Parse(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
