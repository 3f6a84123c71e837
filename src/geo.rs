//! Geographic points and the quantized keys used as graph identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Number of decimal places kept when turning a coordinate into a [`NodeKey`].
///
/// Points that agree to this precision are the same graph node.
pub const COORDINATE_PRECISION: u32 = 6;

const SCALE: f64 = 1_000_000.0;

/// A latitude/longitude pair in degrees.
///
/// Deserialization goes through [`GeoPoint::new`], so out-of-range input is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, RoutingError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(RoutingError::invalid(format!("{lat}, {lon}")));
        }
        Ok(Self { lat, lon })
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            lat_e6: quantize(self.lat),
            lon_e6: quantize(self.lon),
        }
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = RoutingError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Parses `"lat, lon"`; whitespace anywhere in the input is ignored.
impl FromStr for GeoPoint {
    type Err = RoutingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let mut parts = compact.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RoutingError::invalid(input));
        };
        let lat = lat.parse::<f64>().map_err(|_| RoutingError::invalid(input))?;
        let lon = lon.parse::<f64>().map_err(|_| RoutingError::invalid(input))?;
        Self::new(lat, lon).map_err(|_| RoutingError::invalid(input))
    }
}

fn quantize(degrees: f64) -> i64 {
    (degrees * SCALE).round() as i64
}

/// Canonical node identity: a coordinate rounded to [`COORDINATE_PRECISION`]
/// decimal places, stored as integer micro-degrees.
///
/// Serialized as its `"lat, lon"` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeKey {
    lat_e6: i64,
    lon_e6: i64,
}

impl NodeKey {
    /// The point this key stands for, at key precision.
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat_e6 as f64 / SCALE,
            lon: self.lon_e6 as f64 / SCALE,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.point().fmt(f)
    }
}

impl FromStr for NodeKey {
    type Err = RoutingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input.parse::<GeoPoint>().map(|point| point.key())
    }
}

impl TryFrom<String> for NodeKey {
    type Error = RoutingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeKey> for String {
    fn from(key: NodeKey) -> Self {
        key.to_string()
    }
}

impl From<GeoPoint> for NodeKey {
    fn from(point: GeoPoint) -> Self {
        point.key()
    }
}
