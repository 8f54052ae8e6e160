//! "lon,lat" coordinate strings.
//!
//! Models are asked for `lon,lat` but frequently answer `lat,lon`. The parser
//! swaps the pair when the first number only makes sense as a latitude and the
//! second only as a longitude.
//!
//! Pairs where both magnitudes are at most 90 are ambiguous and are always
//! read as `lon,lat`. A point such as `30.5,60.2` cannot be disambiguated
//! from the text alone.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Largest valid latitude magnitude.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest valid longitude magnitude.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A map position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Builds a coordinate from separately supplied fields, rejecting
    /// non-finite or out-of-range values.
    pub fn from_parts(lon: f64, lat: f64) -> Option<Self> {
        let valid = lon.is_finite()
            && lat.is_finite()
            && lon.abs() <= MAX_LONGITUDE
            && lat.abs() <= MAX_LATITUDE;
        valid.then_some(Self { lon, lat })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

/// Parses `"a,b"` into `(lon, lat)` order, swapping lat-first pairs.
///
/// Only the swap rule looks at magnitudes; the result is not range-checked,
/// so `"500,20"` parses to `lon = 500`. Pass the parts through
/// [`Coordinate::from_parts`] when a valid map position is required.
impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(CoordinateError::WrongShape { parts: parts.len() });
        }

        let first = parse_finite(parts[0])?;
        let second = parse_finite(parts[1])?;

        let looks_lat_first = first.abs() <= MAX_LATITUDE
            && second.abs() > MAX_LATITUDE
            && second.abs() <= MAX_LONGITUDE;

        Ok(if looks_lat_first {
            Coordinate::new(second, first)
        } else {
            Coordinate::new(first, second)
        })
    }
}

fn parse_finite(part: &str) -> Result<f64, CoordinateError> {
    let trimmed = part.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoordinateError::NotANumber(trimmed.to_string()))
}

/// Parses a two-number coordinate string into `(lon, lat)` order.
///
/// Same rules as the [`FromStr`] impl: no range validation is applied.
///
/// # Examples
///
/// ```
/// use tripparse::coordinate::parse_coordinate;
///
/// let a = parse_coordinate("39.9093,116.3974").unwrap();
/// let b = parse_coordinate("116.3974,39.9093").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.lon, 116.3974);
/// ```
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    text.parse().ok()
}

/// Serializes a coordinate as `lon,lat` without rounding.
pub fn format_coordinate(coordinate: Coordinate) -> String {
    coordinate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_first_kept() {
        let c = parse_coordinate("116.3974,39.9093").unwrap();
        assert_eq!(c, Coordinate::new(116.3974, 39.9093));
    }

    #[test]
    fn test_lat_first_swapped() {
        let c = parse_coordinate("39.9093,116.3974").unwrap();
        assert_eq!(c, Coordinate::new(116.3974, 39.9093));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let c = parse_coordinate(" 121.47 , 31.23 ").unwrap();
        assert_eq!(c, Coordinate::new(121.47, 31.23));
    }

    #[test]
    fn test_ambiguous_small_pair_kept_as_lon_lat() {
        let c = parse_coordinate("30.5,60.2").unwrap();
        assert_eq!(c, Coordinate::new(30.5, 60.2));
    }

    #[test]
    fn test_parsing_does_not_range_check() {
        let c = parse_coordinate("500,20").unwrap();
        assert_eq!(c, Coordinate::new(500.0, 20.0));
        assert_eq!(Coordinate::from_parts(c.lon, c.lat), None);
    }

    #[test]
    fn test_wrong_shapes_rejected() {
        assert_eq!(
            "1,2,3".parse::<Coordinate>(),
            Err(CoordinateError::WrongShape { parts: 3 })
        );
        assert!(parse_coordinate("116.4").is_none());
        assert!(parse_coordinate("").is_none());
        assert!(parse_coordinate("故宫").is_none());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_coordinate("NaN,30").is_none());
        assert!(parse_coordinate("inf,30").is_none());
        assert!(parse_coordinate("abc,30").is_none());
    }

    #[test]
    fn test_format_has_no_rounding() {
        let c = Coordinate::new(116.397_428_1, -39.0);
        assert_eq!(format_coordinate(c), "116.3974281,-39");
    }

    #[test]
    fn test_from_parts_validates_range() {
        assert!(Coordinate::from_parts(116.0, 39.0).is_some());
        assert!(Coordinate::from_parts(200.0, 39.0).is_none());
        assert!(Coordinate::from_parts(116.0, f64::NAN).is_none());
    }
}
