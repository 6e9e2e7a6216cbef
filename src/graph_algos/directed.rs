use crate::errors::{Error, Result};
use crate::collections::FxHashSet;
use crate::geometry::Point;
use crate::network::NetworkGraph;
use super::{DistanceRecord, GraphNodeMap, shortest_path};

use std::{collections::BinaryHeap, cmp::Ordering};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};


/// Frontier ordering policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Expand the node closest to the destination in a straight line
    /// Fewer expansions, but the path is not guaranteed to be the shortest
    #[default]
    Directed,
    /// Expand the node with the lowest accumulated cost (plain Dijkstra)
    Exact,
}

/// Path found by a search
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub path: Vec<Point>, // start first, destination last
    pub cost: f64, // accumulated edge weight along path
    pub expanded: usize, // nodes taken off the frontier, destination included
}


/// Frontier entry
/// - ordering needs the priority and the point for ties
/// - index locates the node's record in the node map
#[derive(Debug)]
struct Candidate {
    index: usize,
    priority: f64,
    point: Point,
}

// BinaryHeap is a max-heap, so both comparisons are reversed: smallest
// priority first, then the lexicographically smallest point
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
            .then_with(|| other.point.cmp(&self.point))
    }
}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Candidate {}


/// Best-first search over a network graph
///
/// In the default directed mode the frontier is ordered by straight-line
/// distance to the destination rather than by cost from the start: the node
/// geometrically nearest the goal is always expanded next, even when another
/// frontier node is cheaper to reach. Costs are still relaxed, so each stored
/// path is the cheapest one seen so far through expanded nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathSearch {
    pub mode: SearchMode,
    pub max_expansions: Option<usize>,
}

impl PathSearch {

    pub fn new(mode: SearchMode) -> Self {
        Self { mode, max_expansions: None }
    }

    /// Give up with `ExpansionLimit` once `limit` nodes have been expanded
    /// without reaching the destination
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Search from `start` to `destination`, both of which must be graph keys
    pub fn plan(&self, graph: &NetworkGraph, start: Point, destination: Point) -> Result<Route> {
        for endpoint in [start, destination] {
            if !graph.contains(&endpoint) {
                return Err(Error::MissingNode(endpoint));
            }
        }

        // Discovered nodes, expanded or not
        // The record's parent index points into this same map
        let mut node_map: GraphNodeMap<Point> = GraphNodeMap::default();

        // Expanded nodes, never reconsidered
        let mut visited: FxHashSet<Point> = FxHashSet::default();

        // Unexpanded nodes by priority; entries left behind by a relaxation
        // are skipped once their node is visited
        let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();

        let start_record = DistanceRecord {
            parent: usize::MAX,
            from_start: 0.0,
            to_finish: start.distance(&destination),
        };
        let start_index = node_map.insert_full(start, start_record).0;
        frontier.push(self.candidate(start_index, start, &start_record));

        while let Some(Candidate { index, point: current, .. }) = frontier.pop() {

            if !visited.insert(current) {
                continue;
            }

            if let Some(limit) = self.max_expansions {
                if visited.len() > limit {
                    debug!("Expansion limit {limit} hit searching {start} -> {destination}");
                    return Err(Error::ExpansionLimit(limit));
                }
            }

            let record = node_map[index];
            trace!("expand {current} from_start={} to_finish={}", record.from_start, record.to_finish);

            if current == destination {
                let path = shortest_path(&node_map, index);
                debug!(
                    "Reached {destination} from {start}: {} nodes on path, {} expanded, cost {}",
                    path.len(),
                    visited.len(),
                    record.from_start
                );
                return Ok(Route { path, cost: record.from_start, expanded: visited.len() });
            }

            for edge in graph.edges(&current)? {
                let neighbor = edge.to;
                if !graph.contains(&neighbor) {
                    return Err(Error::MissingNode(neighbor));
                }
                if visited.contains(&neighbor) {
                    continue;
                }

                let candidate_cost = record.from_start + edge.weight;

                match node_map.entry(neighbor) {
                    Vacant(e) => {
                        let neighbor_index = e.index();
                        let neighbor_record = *e.insert(DistanceRecord {
                            parent: index,
                            from_start: candidate_cost,
                            to_finish: neighbor.distance(&destination),
                        });
                        frontier.push(self.candidate(neighbor_index, neighbor, &neighbor_record));
                    }
                    Occupied(mut e) => {
                        if candidate_cost < e.get().from_start {
                            let neighbor_index = e.index();
                            let existing = e.get_mut();
                            existing.parent = index;
                            existing.from_start = candidate_cost;

                            // directed priority is fixed at insertion, the
                            // queued entry is still valid
                            if self.mode == SearchMode::Exact {
                                let updated = *existing;
                                frontier.push(self.candidate(neighbor_index, neighbor, &updated));
                            }
                        }
                    }
                }
            }
        }

        debug!("No path from {start} to {destination} after expanding {} nodes", visited.len());
        Err(Error::NoPathFound { start, destination })
    }

    fn candidate(&self, index: usize, point: Point, record: &DistanceRecord) -> Candidate {
        let priority = match self.mode {
            SearchMode::Directed => record.to_finish,
            SearchMode::Exact => record.from_start,
        };
        Candidate { index, priority, point }
    }
}


/// Directed search from `start` to `destination`, returning the node sequence
pub fn search(graph: &NetworkGraph, start: Point, destination: Point) -> Result<Vec<Point>> {
    PathSearch::default()
        .plan(graph, start, destination)
        .map(|route| route.path)
}
