//! # polyroute CLI
//!
//! Batch front end: turn a line geometry file into a persisted network graph,
//! then query a path between two coordinates over that graph.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use polyroute::{PathSearch, Point, SearchMode, build_network, network::io, route_between, sanity_check};

/// Command-line interface for polyroute
#[derive(Parser)]
#[command(name = "polyroute")]
#[command(about = "Build a network graph from line geometry and route over it")]
#[command(long_about = "Build a graph, then route over it:
  polyroute build roads.json network.json
  polyroute route network.json --from=-75.345943,39.903247 --to=-75.391199,39.922603

Logging goes to stderr; RUST_LOG overrides the level.")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a line feature file into a network graph file
    Build {
        /// JSON file with a `features` mapping of line geometries
        input: PathBuf,
        /// Where to write the network graph
        output: PathBuf,
    },
    /// Find a path between two coordinates over a network graph file
    Route {
        /// Network graph written by `build`
        graph: PathBuf,
        /// Start coordinate as LON,LAT
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        /// Destination coordinate as LON,LAT
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        /// Order the frontier by cost from the start instead of distance to the destination
        #[arg(long)]
        exact: bool,
        /// Give up after expanding this many nodes
        #[arg(long)]
        max_expansions: Option<usize>,
    },
}

/// Parse `LON,LAT` into a point
fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (lon, lat) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT, got {value:?}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude {lon:?}: {e}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude {lat:?}: {e}"))?;

    let point = Point::new(lon, lat);
    if !point.is_finite() {
        return Err(format!("coordinates must be finite, got {value:?}"));
    }
    Ok(point)
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match cli.command {
        Command::Build { input, output } => build(&input, &output),
        Command::Route { graph, from, to, exact, max_expansions } => {
            let mode = if exact { SearchMode::Exact } else { SearchMode::Directed };
            let mut options = PathSearch::new(mode);
            options.max_expansions = max_expansions;
            route(&graph, &from, &to, &options)
        }
    }
}

fn build(input: &Path, output: &Path) -> Result<()> {
    let features = io::load_features(input)
        .with_context(|| format!("reading features from {}", input.display()))?;

    let graph = build_network(&features)?;
    sanity_check(&graph);

    io::save_network(&graph, output)
        .with_context(|| format!("writing network graph to {}", output.display()))?;
    Ok(())
}

fn route(graph_path: &Path, from: &Point, to: &Point, options: &PathSearch) -> Result<()> {
    let graph = io::load_network(graph_path)
        .with_context(|| format!("reading network graph from {}", graph_path.display()))?;

    let route = route_between(&graph, from, to, options)
        .with_context(|| format!("routing {from} -> {to}"))?;

    info!("Path has {} nodes, cost {}, {} nodes expanded", route.path.len(), route.cost, route.expanded);

    let coords: Vec<[f64; 2]> = route.path.iter().map(|&point| point.into()).collect();
    println!("{}", serde_json::to_string(&coords)?);
    Ok(())
}
