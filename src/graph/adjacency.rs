//! Adjacency-list representation of an undirected graph

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;

use crate::error::{GraphError, Result};
use crate::graph::Edge;

/// Undirected graph over a fixed number of vertices.
///
/// Each undirected edge is stored as two records: the inserted edge in the
/// list of its first endpoint and a mirrored copy in the list of the other
/// endpoint. Lookups of the far endpoint are therefore O(1) per entry, and
/// [`Graph::all_edges`] has to skip the mirrored half.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Number of edges inserted so far
    edge_count: usize,

    /// One list per vertex, allocated once in `new` and never resized.
    /// Newest edges sit at the front.
    adjacency: Box<[VecDeque<Edge>]>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: i64) -> Result<Self> {
        let vertex_count =
            usize::try_from(vertex_count).map_err(|_| GraphError::NegativeVertexCount(vertex_count))?;

        Self::with_vertices(vertex_count)
    }

    /// Same as [`Graph::new`] for a count that is already known to be non-negative
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooLarge { vertex_count })?;
        adjacency.resize_with(vertex_count, VecDeque::new);

        Ok(Self {
            edge_count: 0,
            adjacency: adjacency.into_boxed_slice(),
        })
    }

    /// Number of vertices (V)
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of inserted edges (A); mirrored records are not counted
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.vertex_count() {
            return Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }

    /// Insert an undirected edge
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let v1 = edge.first_endpoint();
        let v2 = edge.other_endpoint(v1)?;
        self.validate_vertex(v1)?;
        self.validate_vertex(v2)?;

        let mirror = edge.mirrored();
        self.adjacency[v1].push_front(edge);
        self.adjacency[v2].push_front(mirror);
        self.edge_count += 1;

        Ok(())
    }

    /// Edges incident to `vertex`, newest first
    pub fn adjacency(&self, vertex: usize) -> Result<&VecDeque<Edge>> {
        self.validate_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Number of adjacency records of `vertex` (a self-loop counts twice)
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.adjacency(vertex)?.len())
    }

    /// Check if there's an edge between `v1` and `v2`
    pub fn exists_edge_between(&self, v1: usize, v2: usize) -> Result<bool> {
        self.validate_vertex(v1)?;
        self.validate_vertex(v2)?;

        for edge in &self.adjacency[v1] {
            if edge.other_endpoint(v1)? == v2 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Far endpoint of every edge incident to `vertex`, in adjacency order
    pub fn neighbors(&self, vertex: usize) -> Result<Vec<usize>> {
        self.adjacency(vertex)?
            .iter()
            .map(|edge| edge.other_endpoint(vertex))
            .collect()
    }

    /// Iterate over `(vertex, adjacency list)` pairs
    pub(crate) fn lists(&self) -> impl Iterator<Item = (usize, &VecDeque<Edge>)> + '_ {
        self.adjacency.iter().enumerate()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count)?;
        for (vertex, edges) in self.lists() {
            writeln!(f, "{}: {}", vertex, edges.iter().join("  "))?;
        }
        Ok(())
    }
}
