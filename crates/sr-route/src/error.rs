//! Route-planning error type.

use thiserror::Error;

use sr_graph::GraphError;
use sr_network::NetworkError;

/// Errors produced by `sr-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Both addresses resolved, but no street path joins them.
    #[error("no route from {from:?} to {to:?}")]
    RouteNotFound { from: String, to: String },
}

pub type RouteResult<T> = Result<T, RouteError>;
