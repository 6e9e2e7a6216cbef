//! Build a routable network graph from polyline geometry and find paths over it
//!
//! The pipeline is: line features are turned into a [`NetworkGraph`] by
//! [`network::builder`], the graph is persisted as JSON by [`network::io`],
//! arbitrary coordinates are matched to graph nodes by
//! [`network::map_match`], and [`graph_algos::PathSearch`] walks from one node
//! to the other.

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod network;

pub use errors::{Error, Result};
pub use geometry::Point;
pub use graph_algos::{PathSearch, Route, SearchMode, search};
pub use network::{Edge, Neighbor, NeighborDescriptor, NetworkGraph};
pub use network::builder::{FeatureCollection, GraphBuilder, build_network};
pub use network::map_match::find_nearest_node;
pub use network::sanity::{SanityReport, sanity_check};


/// Match two arbitrary coordinates to graph nodes and search between them
pub fn route_between(
    graph: &NetworkGraph,
    from: &Point,
    to: &Point,
    options: &PathSearch,
) -> Result<Route> {
    let start = find_nearest_node(from, graph)?;
    let destination = find_nearest_node(to, graph)?;
    options.plan(graph, start, destination)
}
