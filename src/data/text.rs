//! Whitespace-delimited integer format: `V E` followed by `E` pairs `v1 v2`

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};

/// Reads integers one at a time, tracking the token position for errors
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_int(&mut self, expected: &'static str) -> Result<i64> {
        let token = self
            .inner
            .next()
            .ok_or(GraphError::UnexpectedEof { expected })?;
        self.position += 1;

        token.parse().map_err(|_| GraphError::Parse {
            token: token.to_string(),
            position: self.position,
        })
    }
}

impl Graph {
    /// Build a graph from a stream in the text format. Edges are unweighted.
    /// Anything after the last pair is ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_limit(reader, None)
    }

    /// Build a graph from a file in the text format
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_limit(path, None)
    }

    /// Like [`Graph::from_reader`], but rejects a vertex count above `max_vertices`
    /// before any adjacency list is allocated
    pub fn from_reader_with_limit<R: Read>(mut reader: R, max_vertices: Option<usize>) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_with_limit(&input, max_vertices)
    }

    pub fn from_path_with_limit<P: AsRef<Path>>(path: P, max_vertices: Option<usize>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader_with_limit(BufReader::new(file), max_vertices)
    }

    fn parse_with_limit(input: &str, max_vertices: Option<usize>) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let vertex_count = tokens.next_int("vertex count")?;
        if let Some(limit) = max_vertices {
            if usize::try_from(vertex_count).is_ok_and(|n| n > limit) {
                return Err(GraphError::VertexLimitExceeded { vertex_count, limit });
            }
        }
        let mut graph = Graph::new(vertex_count)?;

        let edge_count = tokens.next_int("edge count")?;
        if edge_count < 0 {
            return Err(GraphError::NegativeEdgeCount(edge_count));
        }

        for _ in 0..edge_count {
            let v1 = tokens.next_int("edge endpoint")?;
            let v2 = tokens.next_int("edge endpoint")?;
            graph.add_edge(Edge::new(v1, v2)?)?;
        }

        Ok(graph)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        Graph::parse_with_limit(input, None)
    }
}

/// Load a graph file, logging its size
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading graph file: {}", path.display());

    let graph = Graph::from_path(path)?;
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_counts_and_pairs() {
        let graph: Graph = "4\n4\n0 1\n1 2\n2 0\n2 3\n".parse().unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.exists_edge_between(3, 2).unwrap());
        assert!(graph.all_edges().unwrap().iter().all(|e| e.weight() == 0.0));
    }

    #[test]
    fn any_whitespace_separates_tokens() {
        let graph = Graph::from_reader("3 2\t0 1   \r\n 1\n2".as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.exists_edge_between(1, 2).unwrap());
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let graph: Graph = "2 1 0 1 5 5 5".parse().unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn negative_counts_are_invalid() {
        let err = "-1 0".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::NegativeVertexCount(-1)));

        let err = "3 -2".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::NegativeEdgeCount(-2)));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn endpoint_errors_are_bounds_errors() {
        let err = "3 1 0 3".parse::<Graph>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Bounds);

        let err = "3 1 -1 2".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::NegativeVertex { vertex: -1 }));
    }

    #[test]
    fn vertex_limit_is_checked_before_allocating() {
        let err = Graph::from_reader_with_limit("100000000000 0".as_bytes(), Some(3)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexLimitExceeded { vertex_count: 100_000_000_000, limit: 3 }
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let graph = Graph::from_reader_with_limit("3 1 0 2".as_bytes(), Some(3)).unwrap();
        assert_eq!(graph.vertex_count(), 3);

        // a negative count is still reported as such
        let err = Graph::from_reader_with_limit("-4 0".as_bytes(), Some(3)).unwrap_err();
        assert!(matches!(err, GraphError::NegativeVertexCount(-4)));
    }

    #[test]
    fn short_input_reports_what_was_missing() {
        let err = "5".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedEof { expected: "edge count" }));

        let err = "5 2 0 1 3".parse::<Graph>().unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedEof { expected: "edge endpoint" }));
    }

    #[test]
    fn non_integer_token_is_a_parse_error() {
        let err = "3 1 0 x".parse::<Graph>().unwrap_err();
        match err {
            GraphError::Parse { token, position } => {
                assert_eq!(token, "x");
                assert_eq!(position, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3 3\n0 1\n1 2\n0 2").unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.unique_edges().unwrap().len(), 3);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Graph::from_path(dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}
