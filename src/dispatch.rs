//! Daily dispatch: match, balance, bracket with the depot, then route.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::balance::balance;
use crate::geo::{GeoPoint, NodeKey};
use crate::matcher::{DriverProfile, JobsiteRequirement, match_drivers};
use crate::network::RoadNetwork;
use crate::route::{SnappedRoute, compose_snapped_route};
use crate::traits::{Id, RouteFiller};

/// Fleet depot every daily route starts and ends at.
pub const DEFAULT_DEPOT: GeoPoint = GeoPoint {
    lat: 1.3053692855071002,
    lon: 103.73862158586589,
};

#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub depot: GeoPoint,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSchedule<D> {
    pub driver: D,
    pub jobsites: Vec<NodeKey>,
    /// Depot, jobsites in assignment order, depot.
    pub stops: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAssignment<D> {
    pub schedules: Vec<DriverSchedule<D>>,
    /// Jobsites no driver is certified for, in input order.
    pub unassigned: Vec<NodeKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRoutePlan<D> {
    pub driver: D,
    /// One route per consecutive pair of distinct stops.
    pub legs: Vec<SnappedRoute>,
}

pub fn dispatch<D>(
    drivers: &[DriverProfile<D>],
    jobsites: &[JobsiteRequirement<NodeKey>],
    config: &DispatchConfig,
) -> DailyAssignment<D>
where
    D: Id + Send + Sync,
{
    let matches = match_drivers(drivers, jobsites);
    let balanced = balance(&matches);

    let mut listed = HashSet::new();
    let unassigned: Vec<NodeKey> = jobsites
        .iter()
        .map(|site| site.id)
        .filter(|site| listed.insert(*site) && !balanced.contains_jobsite(site))
        .collect();
    for site in &unassigned {
        warn!(jobsite = %site, "no certified driver for jobsite");
    }

    let schedules: Vec<DriverSchedule<D>> = balanced
        .into_entries()
        .into_iter()
        .map(|(driver, jobsites)| {
            let mut stops = Vec::with_capacity(jobsites.len() + 2);
            stops.push(config.depot);
            stops.extend(jobsites.iter().map(NodeKey::point));
            stops.push(config.depot);
            DriverSchedule {
                driver,
                jobsites,
                stops,
            }
        })
        .collect();

    info!(
        drivers = schedules.len(),
        jobsites = jobsites.len(),
        unassigned = unassigned.len(),
        "dispatched daily jobs"
    );

    DailyAssignment {
        schedules,
        unassigned,
    }
}

/// Routes every driver's stops leg by leg.
///
/// Drivers without jobsites get no legs. A leg that cannot be routed is
/// logged and left out; the remaining legs and drivers are unaffected.
pub async fn plan_driver_routes<D, F>(
    network: &RoadNetwork,
    assignment: &DailyAssignment<D>,
    filler: &F,
) -> Vec<DriverRoutePlan<D>>
where
    D: Id + std::fmt::Debug,
    F: RouteFiller,
{
    let mut plans = Vec::with_capacity(assignment.schedules.len());

    for schedule in &assignment.schedules {
        let mut legs = Vec::new();
        if !schedule.jobsites.is_empty() {
            for pair in schedule.stops.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                if from.key() == to.key() {
                    continue;
                }
                match compose_snapped_route(network, from, to, filler).await {
                    Ok(leg) => legs.push(leg),
                    Err(err) => {
                        warn!(driver = ?schedule.driver, error = %err, from = %from, to = %to, "skipping unroutable leg");
                    }
                }
            }
        }

        plans.push(DriverRoutePlan {
            driver: schedule.driver.clone(),
            legs,
        });
    }

    plans
}
