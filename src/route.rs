//! Route composition: graph search first, external fill for the rest.
//!
//! A composed route has a *confident* part (the A* path over the road graph)
//! and, when the graph could not reach the destination, a *filled* part
//! supplied by a [`RouteFiller`]. A failing filler never fails the route; the
//! confident part is returned on its own.

use serde::Serialize;
use tracing::{debug, warn};

use crate::astar::search;
use crate::error::RoutingError;
use crate::geo::GeoPoint;
use crate::graph::Graph;
use crate::network::RoadNetwork;
use crate::polyline::Polyline;
use crate::traits::RouteFiller;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedRoute {
    pub confident: Polyline,
    /// Starts at the last confident point; `None` when not needed or unavailable.
    pub filled: Option<Polyline>,
    /// Whether the graph search reached the destination by itself.
    pub complete: bool,
}

impl ComposedRoute {
    /// Whether the route ends at the destination, by graph or by fill.
    pub fn reaches_destination(&self) -> bool {
        self.complete || self.filled.is_some()
    }

    /// Confident and filled parts joined into one line.
    pub fn points(&self) -> Vec<GeoPoint> {
        let mut points = self.confident.points().to_vec();
        if let Some(filled) = &self.filled {
            points.extend(filled.points().iter().skip(1).copied());
        }
        points
    }
}

/// Route from an off-network start: an approach leg onto the nearest network
/// point, then the composed route from there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnappedRoute {
    pub approach: Polyline,
    pub route: ComposedRoute,
}

impl SnappedRoute {
    pub fn points(&self) -> Vec<GeoPoint> {
        let mut points = self.approach.points().to_vec();
        let route = self.route.points();
        let seam = match (points.last(), route.first()) {
            (Some(a), Some(b)) => a.key() == b.key(),
            _ => false,
        };
        let skip = usize::from(seam);
        points.extend(route.into_iter().skip(skip));
        points
    }
}

pub async fn compose_route<F: RouteFiller>(
    network: &RoadNetwork,
    start: GeoPoint,
    end: GeoPoint,
    filler: &F,
) -> Result<ComposedRoute, RoutingError> {
    let graph = Graph::build(network)?;
    let outcome = search(&graph, start, end);
    let confident = Polyline::new(outcome.path);

    if outcome.complete {
        return Ok(ComposedRoute {
            confident,
            filled: None,
            complete: true,
        });
    }

    let reached = confident.last().unwrap_or(start);
    let filled = match filler.fill(reached, end).await {
        Ok(waypoints) => {
            debug!(waypoints = waypoints.len(), from = %reached, to = %end, "filled route gap");
            let mut line = Vec::with_capacity(waypoints.len() + 1);
            line.push(reached);
            line.extend(waypoints);
            Some(Polyline::new(line))
        }
        Err(err) => {
            warn!(error = %err, from = %reached, to = %end, "route fill failed, keeping partial route");
            None
        }
    };

    Ok(ComposedRoute {
        confident,
        filled,
        complete: false,
    })
}

/// Snaps `start` onto the network, fills the approach, then composes.
///
/// A start already on the network has a one-point approach. Otherwise the
/// approach falls back to a straight hop when the filler fails.
pub async fn compose_snapped_route<F: RouteFiller>(
    network: &RoadNetwork,
    start: GeoPoint,
    end: GeoPoint,
    filler: &F,
) -> Result<SnappedRoute, RoutingError> {
    let snapped = network
        .nearest_point(start)
        .ok_or(RoutingError::EmptyNetwork)?;

    let mut approach = vec![start];
    if snapped.key() != start.key() {
        match filler.fill(start, snapped).await {
            Ok(waypoints) => approach.extend(waypoints),
            Err(err) => {
                warn!(error = %err, from = %start, to = %snapped, "approach fill failed, using direct hop");
            }
        }
        approach.push(snapped);
    }

    let route = compose_route(network, snapped, end, filler).await?;
    Ok(SnappedRoute {
        approach: Polyline::new(approach),
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn route(confident: Vec<GeoPoint>, filled: Option<Vec<GeoPoint>>) -> ComposedRoute {
        ComposedRoute {
            complete: filled.is_none(),
            confident: Polyline::new(confident),
            filled: filled.map(Polyline::new),
        }
    }

    #[test]
    fn test_points_join_without_repeating_the_seam() {
        let composed = route(
            vec![point(0.0, 0.0), point(0.0, 1.0)],
            Some(vec![point(0.0, 1.0), point(0.5, 1.5), point(1.0, 2.0)]),
        );
        assert_eq!(
            composed.points(),
            vec![point(0.0, 0.0), point(0.0, 1.0), point(0.5, 1.5), point(1.0, 2.0)]
        );
        assert!(composed.reaches_destination());
    }

    #[test]
    fn test_unfilled_partial_route() {
        let composed = ComposedRoute {
            confident: Polyline::new(vec![point(0.0, 0.0)]),
            filled: None,
            complete: false,
        };
        assert!(!composed.reaches_destination());
        assert_eq!(composed.points(), vec![point(0.0, 0.0)]);
    }

    #[test]
    fn test_snapped_points_skip_duplicate_snap_point() {
        let snapped = SnappedRoute {
            approach: Polyline::new(vec![point(0.5, 0.5), point(0.0, 0.0)]),
            route: route(vec![point(0.0, 0.0), point(0.0, 1.0)], None),
        };
        assert_eq!(
            snapped.points(),
            vec![point(0.5, 0.5), point(0.0, 0.0), point(0.0, 1.0)]
        );
    }
}
