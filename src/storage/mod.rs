//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, to_string_pretty, Value};

use crate::clique::metrics;
use crate::error::Result as GraphResult;
use crate::graph::Graph;

/// Build the JSON report for a search result
pub fn build_report(graph: &Graph, clique: &[usize]) -> Result<Value> {
    let vertex_count = graph.vertex_count();
    let degree_sum: usize = (0..vertex_count)
        .map(|v| graph.degree(v))
        .sum::<GraphResult<usize>>()?;

    let avg_degree = if vertex_count == 0 {
        0.0
    } else {
        degree_sum as f64 / vertex_count as f64
    };

    let mut sorted = clique.to_vec();
    sorted.sort_unstable();

    let report = json!({
        "graph_stats": {
            "vertex_count": vertex_count,
            "edge_count": graph.edge_count(),
            "unique_edge_count": graph.unique_edges()?.len(),
            "avg_degree": avg_degree,
        },
        "clique": {
            "size": clique.len(),
            "members": clique,
            "sorted_members": sorted,
            "density": metrics::density(graph, clique)?,
        }
    });

    Ok(report)
}

/// Save a search result as pretty-printed JSON
pub fn save_report<P: AsRef<Path>>(path: P, graph: &Graph, clique: &[usize]) -> Result<()> {
    let path = path.as_ref();
    log::info!("Saving clique report to {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let report = build_report(graph, clique)?;
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&report)?.as_bytes())?;

    Ok(())
}
