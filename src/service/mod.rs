//! Upload pipeline: stage, parse, search, respond

use std::io::{self, Read};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::clique::{metrics, CliqueSearch};
use crate::config::Config;
use crate::error::{ErrorKind, GraphError};
use crate::graph::Graph;

/// Errors raised while processing an uploaded graph
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to stage upload: {0}")]
    Staging(#[from] io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("search returned vertices that do not form a clique: {0:?}")]
    NotAClique(Vec<usize>),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Staging(_) => ErrorKind::Input,
            ServiceError::Graph(err) => err.kind(),
            ServiceError::NotAClique(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Outcome of one upload, ready to be serialized
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Serialized as a bare JSON array of vertex indices
    Clique(Vec<usize>),
    Failure { kind: ErrorKind, message: String },
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Clique(_))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ServiceError> for Response {
    fn from(err: ServiceError) -> Self {
        Response::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// A loaded graph together with its maximum clique
#[derive(Debug)]
pub struct Processed {
    pub graph: Graph,
    pub clique: Vec<usize>,
}

/// Copy an upload into a temporary file that lives as long as the handle
fn stage_upload<R: Read>(mut upload: R) -> Result<NamedTempFile, ServiceError> {
    let mut staged = NamedTempFile::new()?;
    let bytes = io::copy(&mut upload, staged.as_file_mut())?;
    log::debug!("Staged {} bytes at {}", bytes, staged.path().display());
    Ok(staged)
}

/// Load a graph from an upload and search it for a maximum clique
pub fn process_upload<R: Read>(upload: R, config: &Config) -> Result<Processed, ServiceError> {
    let staged = stage_upload(upload)?;
    let graph = Graph::from_path_with_limit(staged.path(), config.vertex_limit())?;
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    if config.log_graph {
        log::debug!("{}", graph);
    }

    let clique = CliqueSearch::new(&graph).find_max_clique()?;
    if !metrics::is_clique(&graph, &clique)? {
        return Err(ServiceError::NotAClique(clique));
    }

    Ok(Processed { graph, clique })
}

/// Run [`process_upload`] and turn the outcome into a response
pub fn respond<R: Read>(upload: R, config: &Config) -> Response {
    match process_upload(upload, config) {
        Ok(processed) => Response::Clique(processed.clique),
        Err(err) => {
            log::error!("Failed to process graph: {}", err);
            err.into()
        }
    }
}
