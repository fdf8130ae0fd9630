//! Errors.

use thiserror::Error;

/// Error type for graph operations.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum GraphError {
    /// Vertex key is not registered in the graph.
    #[error("Invalid vertex key [{0}]")]
    InvalidVertex(String),

    /// Two consecutive path vertices are not joined by an edge.
    #[error("No edge between [{0}] and [{1}]")]
    MissingEdge(String, String),
}

/// Error creating a route.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteError {
    #[error("Route length must be at least one segment")]
    ZeroSegments,
}

pub type Result<T> = std::result::Result<T, GraphError>;
