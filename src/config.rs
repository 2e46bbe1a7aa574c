//! Configuration management for the clique finder

/// Default configuration for the clique finder
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest graph the exhaustive search will accept (0 = no limit).
    /// The search visits up to 2^V leaves, so 24 keeps a complete graph at
    /// roughly 16.7 million leaves (about a second); every extra vertex doubles it.
    pub max_vertices: usize,

    /// Dump the adjacency listing of every loaded graph at debug level
    pub log_graph: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_vertices: 24,
            log_graph: true,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(max_vertices: usize, log_graph: bool) -> Self {
        Self {
            max_vertices,
            log_graph,
        }
    }

    /// Vertex ceiling, if one is set
    pub fn vertex_limit(&self) -> Option<usize> {
        (self.max_vertices > 0).then_some(self.max_vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_the_ceiling() {
        assert_eq!(Config::new(0, false).vertex_limit(), None);
        assert_eq!(Config::default().vertex_limit(), Some(24));
    }
}
