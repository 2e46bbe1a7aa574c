//! Error types shared by the graph, loader and search

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A vertex index outside `[0, V)`
    Bounds,
    /// A count, weight or endpoint query that makes no sense
    InvalidArgument,
    /// The serialized graph could not be read
    Input,
}

/// Errors raised while building or querying a graph
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex must be a non-negative integer, got {vertex}")]
    NegativeVertex { vertex: i64 },

    #[error("vertex {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },

    #[error("number of vertices must be non-negative, got {0}")]
    NegativeVertexCount(i64),

    #[error("graph has {vertex_count} vertices, the limit is {limit}")]
    VertexLimitExceeded { vertex_count: i64, limit: usize },

    #[error("cannot allocate adjacency lists for {vertex_count} vertices")]
    TooLarge { vertex_count: usize },

    #[error("number of edges must be non-negative, got {0}")]
    NegativeEdgeCount(i64),

    #[error("vertex {vertex} is not an endpoint of edge {v1}-{v2}")]
    NotAnEndpoint { vertex: usize, v1: usize, v2: usize },

    #[error("edge weight is not a number")]
    NanWeight,

    #[error("expected an integer at token {position}, found {token:?}")]
    Parse { token: String, position: usize },

    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NegativeVertex { .. } | GraphError::VertexOutOfBounds { .. } => {
                ErrorKind::Bounds
            }
            GraphError::NegativeVertexCount(_)
            | GraphError::VertexLimitExceeded { .. }
            | GraphError::TooLarge { .. }
            | GraphError::NegativeEdgeCount(_)
            | GraphError::NotAnEndpoint { .. }
            | GraphError::NanWeight => ErrorKind::InvalidArgument,
            GraphError::Parse { .. } | GraphError::UnexpectedEof { .. } | GraphError::Io(_) => {
                ErrorKind::Input
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
