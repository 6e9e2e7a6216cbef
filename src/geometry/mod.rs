pub mod codec;

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};
use num_traits::Float;
use serde::{Deserialize, Serialize};


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// (longitude, latitude) pair identifying a graph node
///
/// Equality is exact float equality, so two points are the same node only if
/// both coordinates match bit for bit (`-0.0` and `0.0` are treated as equal).
/// Coordinates are expected to be finite; NaN never equals itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {

    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Straight-line distance in coordinate units
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.lon, self.lat, other.lon, other.lat)
    }

    pub(crate) fn squared_distance(&self, other: &Point) -> f64 {
        squared_euclidean(self.lon, self.lat, other.lon, other.lat)
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

// -0.0 + 0.0 == +0.0, which folds both zeros onto one bit pattern
fn canonical(v: f64) -> f64 {
    v + 0.0
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.lon == other.lon && self.lat == other.lat
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical(self.lon).to_bits().hash(state);
        canonical(self.lat).to_bits().hash(state);
    }
}

/// Lexicographic (lon, lat) order, used to break ties deterministically
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.lon).total_cmp(&canonical(other.lon))
            .then_with(|| canonical(self.lat).total_cmp(&canonical(other.lat)))
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[f64; 2]> for Point {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lon, point.lat]
    }
}

impl From<(f64, f64)> for Point {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}
