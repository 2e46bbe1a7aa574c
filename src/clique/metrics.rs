//! Clique validation and density

use std::collections::HashSet;

use itertools::Itertools;

use crate::error::Result;
use crate::graph::Graph;

/// Check that every pair of distinct members is joined by an edge
pub fn is_clique(graph: &Graph, members: &[usize]) -> Result<bool> {
    for (&a, &b) in members.iter().tuple_combinations() {
        if !graph.exists_edge_between(a, b)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Calculate density (distinct inner edges / potential edges)
pub fn density(graph: &Graph, members: &[usize]) -> Result<f64> {
    let n = members.len();
    if n <= 1 {
        return Ok(1.0); // By convention, singletons have density 1
    }

    let member_set: HashSet<usize> = members.iter().copied().collect();
    let mut inner_edges = 0;
    for edge in graph.unique_edges()? {
        if !edge.is_self_loop() && member_set.contains(&edge.v1()) && member_set.contains(&edge.v2())
        {
            inner_edges += 1;
        }
    }

    let potential_edges = n * (n - 1) / 2;
    Ok(inner_edges as f64 / potential_edges as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::Edge;

    fn square_with_diagonal() -> Graph {
        let mut graph = Graph::new(4).unwrap();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
            graph.add_edge(Edge::new(a, b).unwrap()).unwrap();
        }
        graph
    }

    #[test]
    fn detects_cliques() {
        let graph = square_with_diagonal();
        assert!(is_clique(&graph, &[0, 1, 2]).unwrap());
        assert!(is_clique(&graph, &[3]).unwrap());
        assert!(is_clique(&graph, &[]).unwrap());
        assert!(!is_clique(&graph, &[0, 1, 2, 3]).unwrap());
    }

    #[test]
    fn out_of_range_member_is_an_error() {
        let graph = square_with_diagonal();
        let err = is_clique(&graph, &[0, 8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Bounds);
    }

    #[test]
    fn density_counts_each_pair_once() {
        let graph = square_with_diagonal();
        assert_eq!(density(&graph, &[0, 1, 2]).unwrap(), 1.0);
        assert_eq!(density(&graph, &[0, 1, 2, 3]).unwrap(), 5.0 / 6.0);
        assert_eq!(density(&graph, &[1]).unwrap(), 1.0);
        assert_eq!(density(&graph, &[1, 3]).unwrap(), 0.0);
    }
}
