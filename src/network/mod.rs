//! Node adjacency graph built from line geometries

pub mod builder;
pub mod io;
pub mod map_match;
pub mod sanity;

use serde::{Deserialize, Serialize};

use crate::collections::FxIndexMap;
use crate::errors::{Error, Result};
use crate::geometry::Point;


/// Adjacent point on a line together with the straight-line distance to it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub coord: Point,
    pub dist: f64,
}

impl Neighbor {
    pub fn new(from: &Point, to: Point) -> Self {
        Self { coord: to, dist: from.distance(&to) }
    }
}

/// One observation of a point's neighbours within a single line traversal
///
/// Endpoints of a line have only one slot filled. Descriptors flagged as
/// control points only shape the geometry and are never routed through.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborDescriptor {
    #[serde(default)]
    pub prev: Option<Neighbor>,
    #[serde(default)]
    pub next: Option<Neighbor>,
    #[serde(rename = "c_pt", default, skip_serializing_if = "std::ops::Not::not")]
    pub control_point: bool,
}

impl NeighborDescriptor {

    /// Neighbours reachable through this descriptor, prev first
    pub fn neighbors(&self) -> impl Iterator<Item = &Neighbor> {
        self.prev.iter().chain(self.next.iter())
    }

    pub fn is_traversable(&self) -> bool {
        !self.control_point
    }
}

/// Directed traversable relation read off a descriptor slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub weight: f64,
}


/// Mapping from each point to every adjacency observation recorded for it
///
/// A point shared by several lines keeps one descriptor per appearance.
/// Iteration follows the order in which points were first inserted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkGraph {
    nodes: FxIndexMap<Point, Vec<NeighborDescriptor>>,
}

impl NetworkGraph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor to a point's entry, creating the entry if needed
    pub fn push(&mut self, point: Point, descriptor: NeighborDescriptor) {
        self.nodes.entry(point).or_default().push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.nodes.contains_key(point)
    }

    pub fn descriptors(&self, point: &Point) -> Option<&[NeighborDescriptor]> {
        self.nodes.get(point).map(Vec::as_slice)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.nodes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Point, &[NeighborDescriptor])> {
        self.nodes.iter().map(|(point, descriptors)| (point, descriptors.as_slice()))
    }

    /// Traversable edges leaving `point`
    ///
    /// Fails with `MissingNode` if `point` is not a key of the graph.
    pub fn edges(&self, point: &Point) -> Result<impl Iterator<Item = Edge> + '_> {
        let from = *point;
        let descriptors = self.descriptors(point).ok_or(Error::MissingNode(from))?;

        Ok(descriptors
            .iter()
            .filter(|descriptor| descriptor.is_traversable())
            .flat_map(|descriptor| descriptor.neighbors())
            .map(move |neighbor| Edge { from, to: neighbor.coord, weight: neighbor.dist }))
    }

    /// Mark every descriptor of `point` as a control point
    /// Returns false if the point is not in the graph
    pub fn mark_control_point(&mut self, point: &Point) -> bool {
        match self.nodes.get_mut(point) {
            Some(descriptors) => {
                descriptors.iter_mut().for_each(|d| d.control_point = true);
                true
            }
            None => false,
        }
    }

    pub(crate) fn from_inner(nodes: FxIndexMap<Point, Vec<NeighborDescriptor>>) -> Self {
        Self { nodes }
    }
}
