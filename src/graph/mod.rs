//! Graph representation and edge enumeration

pub mod adjacency;
pub mod algorithms;
pub mod edge;

pub use adjacency::Graph;
pub use edge::Edge;
