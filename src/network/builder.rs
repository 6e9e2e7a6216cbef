//! Conversion of line features into a network graph

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::geometry::Point;
use super::{Neighbor, NeighborDescriptor, NetworkGraph};


/// Geometry kind that supplies one ordered sequence directly
pub const LINE_STRING: &str = "LineString";

/// Input document: named features in file order
#[derive(Clone, Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: IndexMap<String, Feature>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinates,
}

/// Positions are `[lon, lat, ...]`; ordinates past the second are ignored
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Line(Vec<Vec<f64>>),
    Segments(Vec<Vec<Vec<f64>>>),
}

impl Geometry {

    pub fn is_line_string(&self) -> bool {
        self.kind == LINE_STRING
    }

    /// Ordered points of the geometry
    /// Anything other than a LineString is flattened segment after segment
    pub fn points(&self, feature: &str) -> Result<Vec<Point>> {
        let invalid = |reason: &str| Error::InvalidGeometry {
            feature: feature.to_string(),
            reason: reason.to_string(),
        };

        let positions: Vec<&Vec<f64>> = match (&self.coordinates, self.is_line_string()) {
            // `[[]]` and `[[], []]` also parse as a flat list; for segmented
            // kinds they are empty segments, not empty positions
            (Coordinates::Line(line), false) if line.iter().all(Vec::is_empty) => Vec::new(),
            (Coordinates::Line(line), _) => line.iter().collect(),
            (Coordinates::Segments(_), true) => {
                return Err(invalid("LineString coordinates must be a flat list of positions"));
            }
            (Coordinates::Segments(segments), false) => segments.iter().flatten().collect(),
        };

        positions
            .into_iter()
            .map(|position| match position.as_slice() {
                [lon, lat, ..] => {
                    let point = Point::new(*lon, *lat);
                    if point.is_finite() {
                        Ok(point)
                    } else {
                        Err(invalid("coordinates must be finite"))
                    }
                }
                _ => Err(invalid("position needs at least two ordinates")),
            })
            .collect()
    }
}


/// Accumulates line features into a network graph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: NetworkGraph,
    features: usize,
    non_line_strings: usize,
}

impl GraphBuilder {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add one named feature
    pub fn add_feature(&mut self, name: &str, feature: &Feature) -> Result<()> {
        let points = feature.geometry.points(name)?;

        self.features += 1;
        if !feature.geometry.is_line_string() {
            self.non_line_strings += 1;
        }

        debug!("feature {name:?} ({}): {} points", feature.geometry.kind, points.len());
        self.add_line(&points);
        Ok(())
    }

    /// Record prev/next neighbours for every point of an ordered sequence
    /// An empty sequence contributes nothing
    pub fn add_line(&mut self, points: &[Point]) {
        let n = points.len();

        for (index, point) in points.iter().enumerate() {
            let prev = (index > 0).then(|| Neighbor::new(point, points[index - 1]));
            let next = (index + 1 < n).then(|| Neighbor::new(point, points[index + 1]));

            self.graph.push(*point, NeighborDescriptor { prev, next, control_point: false });
        }
    }

    /// Number of features added so far
    pub fn feature_count(&self) -> usize {
        self.features
    }

    /// Number of added features that were flattened
    pub fn non_line_string_count(&self) -> usize {
        self.non_line_strings
    }

    pub fn finish(self) -> NetworkGraph {
        info!(
            "Built network graph: {} features ({} non-LineString), {} points",
            self.features,
            self.non_line_strings,
            self.graph.len()
        );
        self.graph
    }
}


/// Build a network graph from every feature of a collection, in file order
pub fn build_network(collection: &FeatureCollection) -> Result<NetworkGraph> {
    info!("Number of features in this data set: {}", collection.features.len());

    let mut builder = GraphBuilder::new();
    for (name, feature) in &collection.features {
        builder.add_feature(name, feature)?;
    }

    Ok(builder.finish())
}
