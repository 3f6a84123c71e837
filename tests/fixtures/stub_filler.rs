//! Scripted [`RouteFiller`] for tests that must not touch the network.

use std::sync::Mutex;

use fleet_router::error::FillError;
use fleet_router::traits::RouteFiller;
use fleet_router::GeoPoint;

#[derive(Debug, Clone)]
enum StubResponse {
    Route(Vec<GeoPoint>),
    Fail { status: u16 },
}

/// Returns the same response for every call and records each `(from, to)`.
#[derive(Debug)]
pub struct StubFiller {
    response: StubResponse,
    calls: Mutex<Vec<(GeoPoint, GeoPoint)>>,
}

impl StubFiller {
    pub fn with_route(waypoints: Vec<GeoPoint>) -> Self {
        Self {
            response: StubResponse::Route(waypoints),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: StubResponse::Fail { status },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(GeoPoint, GeoPoint)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl RouteFiller for StubFiller {
    async fn fill(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, FillError> {
        self.calls.lock().expect("calls lock").push((from, to));
        match &self.response {
            StubResponse::Route(waypoints) => Ok(waypoints.clone()),
            StubResponse::Fail { status } => Err(FillError::Status { status: *status }),
        }
    }
}
