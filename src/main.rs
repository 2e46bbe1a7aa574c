use std::fs::File;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use graph_clique_finder::config::Config;
use graph_clique_finder::service::{self, Response};
use graph_clique_finder::storage;

#[derive(Parser, Debug)]
#[clap(
    name = "graph-clique-finder",
    about = "Exhaustive maximum clique search over an undirected graph"
)]
struct Cli {
    /// Path to the graph file (`V E` then `E` vertex pairs); reads stdin when omitted
    #[clap(long)]
    input: Option<String>,

    /// Write a JSON report with graph statistics to this path
    #[clap(long)]
    output: Option<String>,

    /// Refuse graphs with more vertices than this (0 = no limit)
    #[clap(long, default_value = "24")]
    max_vertices: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(args.max_vertices, args.verbose);

    let upload: Box<dyn Read> = match &args.input {
        Some(path) => {
            log::info!("Input: {}", path);
            Box::new(File::open(path).with_context(|| format!("failed to open {}", path))?)
        }
        None => {
            log::info!("Input: stdin");
            Box::new(io::stdin().lock())
        }
    };

    let processed = match service::process_upload(upload, &config) {
        Ok(processed) => processed,
        Err(err) => {
            let message = err.to_string();
            println!("{}", Response::from(err).to_json()?);
            anyhow::bail!(message);
        }
    };

    println!("{}", Response::Clique(processed.clique.clone()).to_json()?);

    if let Some(output) = &args.output {
        storage::save_report(output, &processed.graph, &processed.clique)?;
        log::info!("Report saved to {}", output);
    }

    Ok(())
}
