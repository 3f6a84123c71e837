//! Driver ↔ jobsite certification matching.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::geo::NodeKey;
use crate::traits::Id;

/// A driver and the certification tags they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile<D = String> {
    pub id: D,
    #[serde(default)]
    pub qualifications: Vec<String>,
}

impl<D> DriverProfile<D> {
    pub fn new<T: Into<String>>(id: D, qualifications: impl IntoIterator<Item = T>) -> Self {
        Self {
            id,
            qualifications: qualifications.into_iter().map(Into::into).collect(),
        }
    }
}

/// A jobsite and the tags a driver needs to serve it.
///
/// An empty requirement list means any driver qualifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsiteRequirement<J = NodeKey> {
    pub id: J,
    #[serde(default)]
    pub required: Vec<String>,
}

impl<J> JobsiteRequirement<J> {
    pub fn new<T: Into<String>>(id: J, required: impl IntoIterator<Item = T>) -> Self {
        Self {
            id,
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

/// True when every required tag is among the qualifications.
pub fn qualifies(qualifications: &[String], required: &[String]) -> bool {
    required.iter().all(|tag| qualifications.contains(tag))
}

/// Combines requirements that share an id, keeping first-seen order.
pub fn merge_requirements<J: Id>(jobsites: &[JobsiteRequirement<J>]) -> Vec<JobsiteRequirement<J>> {
    let mut merged: Vec<JobsiteRequirement<J>> = Vec::with_capacity(jobsites.len());
    let mut index: HashMap<J, usize> = HashMap::new();

    for site in jobsites {
        match index.get(&site.id) {
            Some(&position) => merged[position].required.extend(site.required.iter().cloned()),
            None => {
                index.insert(site.id.clone(), merged.len());
                merged.push(site.clone());
            }
        }
    }

    merged
}

/// For each driver, in input order, the jobsites (in input order) they qualify for.
///
/// Requirements listed more than once under the same id are combined first, so
/// a driver must hold every tag any of them asks for. Jobsites nobody
/// qualifies for appear under no driver.
pub fn match_drivers<D, J>(
    drivers: &[DriverProfile<D>],
    jobsites: &[JobsiteRequirement<J>],
) -> Assignment<D, J>
where
    D: Id + Send + Sync,
    J: Id + Send + Sync,
{
    let jobsites = merge_requirements(jobsites);
    let entries: Vec<(D, Vec<J>)> = drivers
        .par_iter()
        .map(|driver| {
            let matched = jobsites
                .iter()
                .filter(|site| qualifies(&driver.qualifications, &site.required))
                .map(|site| site.id.clone())
                .collect();
            (driver.id.clone(), matched)
        })
        .collect();

    entries.into_iter().collect()
}
