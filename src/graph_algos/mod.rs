pub mod directed;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

pub use directed::{PathSearch, Route, SearchMode, search};


/// Search bookkeeping for one discovered node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceRecord {
    pub parent: usize, // index of the predecessor in the node map, usize::MAX for the start node
    pub from_start: f64, // accumulated path cost
    pub to_finish: f64, // straight-line distance to the destination, fixed on insertion
}

/// Type alias for the node map used by the search
/// N: Node - point on the graph
/// The record links back to its parent so every stored path can be rebuilt
/// from the start node
pub type GraphNodeMap<N> = FxIndexMap<N, DistanceRecord>;
