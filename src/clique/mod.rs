//! Maximum clique search

pub mod metrics;

use crate::error::Result;
use crate::graph::Graph;

/// Exhaustive maximum clique search over a borrowed graph.
///
/// Every subset of vertices that stays a clique is enumerated by deciding, for
/// vertex 0, 1, ..., V-1 in turn, whether to include it. The include branch is
/// always explored first and the best clique is only replaced by a strictly
/// larger one, so among cliques of maximum size the one found first wins. The
/// cost is exponential in V; callers should cap the vertex count.
pub struct CliqueSearch<'a> {
    graph: &'a Graph,
}

impl<'a> CliqueSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Find a largest clique, as vertex indices in the order they were accepted
    pub fn find_max_clique(&self) -> Result<Vec<usize>> {
        log::info!(
            "Searching for maximum clique over {} vertices",
            self.graph.vertex_count()
        );

        let mut current = Vec::new();
        let mut best = Vec::new();
        self.extend(0, &mut current, &mut best)?;

        log::info!("Found clique of size {}", best.len());
        Ok(best)
    }

    fn extend(&self, vertex: usize, current: &mut Vec<usize>, best: &mut Vec<usize>) -> Result<()> {
        if vertex == self.graph.vertex_count() {
            if current.len() > best.len() {
                best.clone_from(current);
            }
            return Ok(());
        }

        if self.can_add(vertex, current)? {
            current.push(vertex);
            self.extend(vertex + 1, current, best)?;
            current.pop();
        }

        self.extend(vertex + 1, current, best)
    }

    /// Feasibility check: `vertex` is adjacent to every member of `current`
    fn can_add(&self, vertex: usize, current: &[usize]) -> Result<bool> {
        for &member in current {
            if !self.graph.exists_edge_between(vertex, member)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
