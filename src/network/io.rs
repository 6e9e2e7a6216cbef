//! JSON persistence for input geometry and the network graph
//!
//! The graph file is one JSON object keyed by `"(lon, lat)"` strings (see
//! [`crate::geometry::codec`]); values are arrays of neighbour descriptors.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};
use indexmap::IndexMap;
use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::collections::FxIndexMap;
use crate::errors::Result;
use crate::geometry::codec;
use super::builder::FeatureCollection;
use super::{NeighborDescriptor, NetworkGraph};


impl Serialize for NetworkGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(point, descriptors)| (codec::encode(point), descriptors)))
    }
}


pub fn read_features<R: Read>(reader: R) -> Result<FeatureCollection> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load the line features to build a graph from
pub fn load_features<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let path = path.as_ref();
    info!("Loading features from {}", path.display());
    read_features(BufReader::new(File::open(path)?))
}


pub fn write_network<W: Write>(graph: &NetworkGraph, writer: W) -> Result<()> {
    serde_json::to_writer(writer, graph)?;
    Ok(())
}

pub fn save_network<P: AsRef<Path>>(graph: &NetworkGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_network(graph, &mut writer)?;
    writer.flush()?;
    info!("Wrote {} points to {}", graph.len(), path.display());
    Ok(())
}


/// Parse a persisted graph, decoding every key back into a point
///
/// Keys that spell the same point differently (`"(1, 2)"` and `"(1.0, 2.0)"`)
/// are merged, their descriptors appended in file order.
pub fn read_network<R: Read>(reader: R) -> Result<NetworkGraph> {
    let raw: IndexMap<String, Vec<NeighborDescriptor>> = serde_json::from_reader(reader)?;

    let mut nodes: FxIndexMap<_, Vec<NeighborDescriptor>> = FxIndexMap::default();
    nodes.reserve(raw.len());

    for (key, descriptors) in raw {
        let point = codec::decode(&key)?;
        let entry = nodes.entry(point).or_default();
        if !entry.is_empty() {
            warn!("Key {key:?} repeats point {point}, merging descriptors");
        }
        entry.extend(descriptors);
    }

    Ok(NetworkGraph::from_inner(nodes))
}

pub fn load_network<P: AsRef<Path>>(path: P) -> Result<NetworkGraph> {
    let path = path.as_ref();
    let graph = read_network(BufReader::new(File::open(path)?))?;
    info!("Loaded {} points from {}", graph.len(), path.display());
    Ok(graph)
}
