//! Graph input formats

pub mod text;

pub use text::load_graph;
