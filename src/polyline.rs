//! Ordered point sequences: road segments and drawn route lines.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::haversine::distance_km;

/// An ordered sequence of points.
///
/// Used for road network segments (consecutive points are road edges) and
/// for route output handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, i.e. the edges of this line.
    pub fn hops(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of great-circle hop lengths in kilometers.
    pub fn length_km(&self) -> f64 {
        self.hops().map(|(from, to)| distance_km(from, to)).sum()
    }
}

impl From<Vec<GeoPoint>> for Polyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[(f64, f64)]) -> Polyline {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_hops_pair_consecutive_points() {
        let polyline = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        let hops: Vec<_> = polyline.hops().collect();
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].1, hops[1].0);
    }

    #[test]
    fn test_single_point_has_no_hops() {
        let polyline = line(&[(1.0, 1.0)]);
        assert_eq!(polyline.hops().count(), 0);
        assert_eq!(polyline.length_km(), 0.0);
    }

    #[test]
    fn test_length_is_sum_of_hops() {
        let polyline = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        let direct = line(&[(0.0, 0.0), (0.0, 2.0)]);
        assert!((polyline.length_km() - direct.length_km()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::default();
        assert!(polyline.is_empty());
        assert_eq!(polyline.first(), None);
        assert_eq!(polyline.last(), None);
    }
}
