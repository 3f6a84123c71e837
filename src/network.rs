//! Road network input.
//!
//! The on-disk format is a JSON document `{"points": [segment, ...]}` where
//! each segment is an object whose keys, in document order, are `"lat, lon"`
//! strings. Values are ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::RoutingError;
use crate::geo::GeoPoint;
use crate::haversine::distance_km;
use crate::polyline::Polyline;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadNetwork {
    segments: Vec<Polyline>,
}

#[derive(Debug, Deserialize)]
struct RawNetwork {
    points: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl RoadNetwork {
    pub fn new(segments: Vec<Polyline>) -> Self {
        Self { segments }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RoutingError> {
        let raw: RawNetwork = serde_json::from_str(json)?;
        let segments = raw
            .points
            .iter()
            .map(|segment| {
                segment
                    .keys()
                    .map(|key| key.parse::<GeoPoint>())
                    .collect::<Result<Vec<_>, _>>()
                    .map(Polyline::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let network = Self::new(segments);
        debug!(
            segments = network.segments.len(),
            points = network.point_count(),
            "loaded road network"
        );
        Ok(network)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn segments(&self) -> &[Polyline] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Polyline::is_empty)
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Polyline::len).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| segment.points().iter().copied())
    }

    /// The network point closest to `target`; the earliest one wins a tie.
    pub fn nearest_point(&self, target: GeoPoint) -> Option<GeoPoint> {
        self.points()
            .map(|point| (point, distance_km(target, point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(point, _)| point)
    }
}
