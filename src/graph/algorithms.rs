//! Edge enumeration over the mirrored adjacency lists

use itertools::Itertools;

use crate::error::Result;
use crate::graph::{Edge, Graph};

impl Graph {
    /// Every undirected edge once.
    ///
    /// An edge is taken from the list of its lower endpoint. A self-loop sits
    /// twice in its vertex's list, so only every other occurrence is kept.
    pub fn all_edges(&self) -> Result<Vec<Edge>> {
        let mut edges = Vec::with_capacity(self.edge_count());

        for (vertex, list) in self.lists() {
            let mut self_loops = 0;
            for edge in list {
                let other = edge.other_endpoint(vertex)?;
                if other > vertex {
                    edges.push(edge.clone());
                } else if other == vertex {
                    if self_loops % 2 == 0 {
                        edges.push(edge.clone());
                    }
                    self_loops += 1;
                }
            }
        }

        Ok(edges)
    }

    /// [`Graph::all_edges`] with parallel edges collapsed to the first one seen
    pub fn unique_edges(&self) -> Result<Vec<Edge>> {
        Ok(self
            .all_edges()?
            .into_iter()
            .unique_by(Edge::endpoint_key)
            .collect())
    }

    /// Edges sharing at least one endpoint with `edge`, excluding any edge
    /// that joins the same pair of vertices
    pub fn adjacent_edges(&self, edge: &Edge) -> Result<Vec<Edge>> {
        Ok(self
            .all_edges()?
            .into_iter()
            .filter(|candidate| !candidate.same_endpoints(edge))
            .filter(|candidate| candidate.touches(edge.v1()) || candidate.touches(edge.v2()))
            .collect())
    }
}
