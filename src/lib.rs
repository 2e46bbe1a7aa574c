//! Core library for the maximum clique finder

pub mod clique;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod service;
pub mod storage;

pub use clique::CliqueSearch;
pub use error::{ErrorKind, GraphError};
pub use graph::{Edge, Graph};
