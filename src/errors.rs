use thiserror::Error;

use crate::geometry::Point;


/// Errors raised while building, persisting or searching a network graph
#[derive(Error, Debug)]
pub enum Error {
    #[error("node {0} is not present in the network graph")]
    MissingNode(Point), // usually a key that did not survive a string round trip
    #[error("no path from {start} to {destination}")]
    NoPathFound { start: Point, destination: Point },
    #[error("search gave up after expanding {0} nodes")]
    ExpansionLimit(usize),
    #[error("invalid point key: {0:?}")]
    InvalidPointKey(String),
    #[error("invalid geometry in feature {feature:?}: {reason}")]
    InvalidGeometry { feature: String, reason: String },
    #[error("network graph is empty")]
    EmptyGraph,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
