//! Point <-> string key conversion for the persisted network graph
//!
//! Canonical form is `"(lon, lat)"`. Each coordinate is written with the
//! shortest representation that parses back to the same `f64`, always with a
//! fractional part or an exponent (`1.0`, `-75.345943`, `1e-7`). Parsing with
//! `str::parse::<f64>` is correctly rounded, so `decode(encode(p)) == p` for
//! every finite point. Keys spelling NaN or infinity are rejected. Keys
//! written by other tools in the same shape decode as long as they print
//! floats with enough digits to round trip.

use crate::errors::{Error, Result};
use super::Point;


/// Encode a point as its persisted key
pub fn encode(point: &Point) -> String {
    format!("({:?}, {:?})", point.lon, point.lat)
}

/// Decode a persisted key back into a point
pub fn decode(key: &str) -> Result<Point> {
    let invalid = || Error::InvalidPointKey(key.to_string());

    let inner = key
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let (lon, lat) = inner.split_once(',').ok_or_else(invalid)?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;

    let point = Point::new(lon, lat);
    if !point.is_finite() {
        return Err(invalid());
    }

    Ok(point)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        assert_eq!(encode(&Point::new(-75.345943, 39.903247)), "(-75.345943, 39.903247)");
        assert_eq!(encode(&Point::new(1.0, 0.0)), "(1.0, 0.0)");
        assert_eq!(encode(&Point::new(1e-7, 2.5)), "(1e-7, 2.5)");
    }

    #[test]
    fn test_round_trip_is_exact() {
        let samples = [
            Point::new(-75.345943, 39.903247),
            Point::new(-75.355627, 39.907071),
            Point::new(0.1 + 0.2, 1.0 / 3.0),
            Point::new(f64::MIN_POSITIVE, f64::MAX),
            Point::new(-179.99999999999997, 89.99999999999999),
            Point::new(5e-324, -0.0),
            Point::new(123456789.123456789, -1e21),
        ];
        for point in samples {
            let decoded = decode(&encode(&point)).unwrap();
            assert_eq!(decoded, point);
            assert_eq!(decoded.lon.to_bits(), point.lon.to_bits());
        }
    }

    #[test]
    fn test_decode_accepts_foreign_spacing() {
        assert_eq!(decode("(1, 2)").unwrap(), Point::new(1.0, 2.0));
        assert_eq!(decode(" (1.5,-2.25) ").unwrap(), Point::new(1.5, -2.25));
        assert_eq!(decode("(1e-07, 3.0)").unwrap(), Point::new(1e-7, 3.0));
    }

    #[test]
    fn test_decode_rejects_non_finite_keys() {
        for key in ["(NaN, 0.0)", "(0.0, nan)", "(inf, 1.0)", "(1.0, -inf)", "(infinity, 2.0)"] {
            assert!(
                matches!(decode(key), Err(Error::InvalidPointKey(_))),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_malformed_keys() {
        for key in ["1.0, 2.0", "(1.0 2.0)", "(1.0, two)", "(1.0, 2.0, 3.0)", "()"] {
            assert!(
                matches!(decode(key), Err(Error::InvalidPointKey(_))),
                "{key} should be rejected"
            );
        }
    }
}
