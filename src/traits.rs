//! Core traits for the fleet router.
//!
//! Concrete apps implement them for their own identifiers and routing
//! providers.

use std::future::Future;
use std::hash::Hash;

use crate::error::FillError;
use crate::geo::GeoPoint;

/// Unique identifier for drivers and jobsites.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// External routing service used when the road graph cannot reach a target.
///
/// Returns the waypoints between `from` and `to` in travel order. Neither
/// endpoint is required to appear in the result.
pub trait RouteFiller {
    fn fill(
        &self,
        from: GeoPoint,
        to: GeoPoint,
    ) -> impl Future<Output = Result<Vec<GeoPoint>, FillError>> + Send;
}
