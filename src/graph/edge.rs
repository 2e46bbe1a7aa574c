//! Undirected edge record stored in adjacency lists

use std::cmp::Ordering;
use std::fmt;

use crate::error::{GraphError, Result};

/// An edge between two vertices with an optional weight.
///
/// The graph stores every undirected edge twice, once per endpoint, with the
/// endpoints swapped so that `v1` is always the vertex owning the list.
#[derive(Debug, Clone)]
pub struct Edge {
    v1: usize,
    v2: usize,
    weight: f64,

    /// Caller-owned annotation, never read by the search
    used: bool,
}

fn checked_endpoint(vertex: i64) -> Result<usize> {
    usize::try_from(vertex).map_err(|_| GraphError::NegativeVertex { vertex })
}

impl Edge {
    /// Create an unweighted edge (weight 0)
    pub fn new(v1: i64, v2: i64) -> Result<Self> {
        Self::weighted(v1, v2, 0.0)
    }

    /// Create an edge with the given weight
    pub fn weighted(v1: i64, v2: i64, weight: f64) -> Result<Self> {
        let v1 = checked_endpoint(v1)?;
        let v2 = checked_endpoint(v2)?;
        if weight.is_nan() {
            return Err(GraphError::NanWeight);
        }

        Ok(Self {
            v1,
            v2,
            weight,
            used: false,
        })
    }

    pub fn v1(&self) -> usize {
        self.v1
    }

    pub fn v2(&self) -> usize {
        self.v2
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The origin of this edge
    pub fn first_endpoint(&self) -> usize {
        self.v1
    }

    /// Get the endpoint that is not `vertex`
    pub fn other_endpoint(&self, vertex: usize) -> Result<usize> {
        if vertex == self.v1 {
            Ok(self.v2)
        } else if vertex == self.v2 {
            Ok(self.v1)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                v1: self.v1,
                v2: self.v2,
            })
        }
    }

    /// Same edge seen from the other endpoint
    pub fn mirrored(&self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
            weight: self.weight,
            used: false,
        }
    }

    /// Whether both edges join the same pair of vertices, in either direction
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.endpoint_key() == other.endpoint_key()
    }

    /// Check if the edge touches `vertex`
    pub fn touches(&self, vertex: usize) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Unordered endpoint pair, smaller index first
    pub(crate) fn endpoint_key(&self) -> (usize, usize) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn set_used(&mut self, used: bool) {
        self.used = used;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Weight first; endpoints only break ties so that Ord agrees with Eq.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.v1.cmp(&other.v1))
            .then(self.v2.cmp(&other.v2))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight != 0.0 {
            write!(f, "{}-{} {:.5}", self.v1, self.v2, self.weight)
        } else {
            write!(f, "{}", self.v2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn negative_endpoint_is_a_bounds_error() {
        let err = Edge::new(-1, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Bounds);

        let err = Edge::weighted(2, -5, 1.0).unwrap_err();
        assert!(matches!(err, GraphError::NegativeVertex { vertex: -5 }));
    }

    #[test]
    fn nan_weight_is_rejected() {
        let err = Edge::weighted(0, 1, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn unweighted_edge_defaults_to_zero() {
        let edge = Edge::new(4, 9).unwrap();
        assert_eq!(edge.weight(), 0.0);
        assert_eq!(edge.first_endpoint(), 4);
        assert!(!edge.is_used());
    }

    #[test]
    fn other_endpoint_resolves_both_sides() {
        let edge = Edge::new(12, 34).unwrap();
        assert_eq!(edge.other_endpoint(12).unwrap(), 34);
        assert_eq!(edge.other_endpoint(34).unwrap(), 12);

        let err = edge.other_endpoint(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn self_loop_other_endpoint_is_itself() {
        let edge = Edge::new(3, 3).unwrap();
        assert!(edge.is_self_loop());
        assert_eq!(edge.other_endpoint(3).unwrap(), 3);
    }

    #[test]
    fn edges_sort_by_weight() {
        let mut edges = vec![
            Edge::weighted(0, 1, 2.5).unwrap(),
            Edge::weighted(5, 6, -1.0).unwrap(),
            Edge::weighted(2, 3, 0.75).unwrap(),
        ];
        edges.sort();

        let weights: Vec<f64> = edges.iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![-1.0, 0.75, 2.5]);
        assert!(edges[0] < edges[1]);
    }

    #[test]
    fn usage_flag_does_not_affect_equality() {
        let mut a = Edge::new(1, 2).unwrap();
        let b = a.clone();
        a.set_used(true);
        assert!(a.is_used());
        assert_eq!(a, b);
    }

    #[test]
    fn mirrored_swaps_endpoints() {
        let edge = Edge::weighted(1, 7, 0.5).unwrap();
        let mirror = edge.mirrored();
        assert_eq!((mirror.v1(), mirror.v2()), (7, 1));
        assert_eq!(mirror.weight(), 0.5);
        assert!(edge.same_endpoints(&mirror));
    }

    #[test]
    fn display_matches_adjacency_listing() {
        assert_eq!(Edge::weighted(12, 34, 5.67).unwrap().to_string(), "12-34 5.67000");
        assert_eq!(Edge::new(12, 34).unwrap().to_string(), "34");
    }
}
