//! Greedy load balancing of matched jobsites.
//!
//! Jobsites are taken in first-seen order across drivers; each goes to the
//! eligible driver with the fewest jobsites so far, earlier drivers winning
//! ties. Earlier choices shape later ones, so the result is greedy rather than
//! a global optimum.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::assignment::Assignment;
use crate::traits::Id;

pub fn balance<D: Id, J: Id>(matches: &Assignment<D, J>) -> Assignment<D, J> {
    let eligible = eligible_drivers(matches);

    let mut result: Assignment<D, J> = matches
        .drivers()
        .map(|driver| (driver.clone(), Vec::new()))
        .collect();
    let mut seen: HashSet<J> = HashSet::new();

    for (jobsite, mut drivers) in eligible {
        // stable: equal loads keep match order
        drivers.sort_by_key(|driver| result.load(driver));
        if let Some(driver) = drivers.first() {
            if seen.insert(jobsite.clone()) {
                result.push(driver, jobsite);
            }
        }
    }

    debug!(
        drivers = result.len(),
        jobsites = seen.len(),
        "balanced jobsite assignment"
    );
    result
}

/// Jobsite → drivers able to serve it, jobsites in first-seen order.
fn eligible_drivers<D: Id, J: Id>(matches: &Assignment<D, J>) -> Vec<(J, Vec<D>)> {
    let mut order: Vec<(J, Vec<D>)> = Vec::new();
    let mut index: HashMap<J, usize> = HashMap::new();

    for (driver, jobsites) in matches.iter() {
        for jobsite in jobsites {
            let position = *index.entry(jobsite.clone()).or_insert_with(|| {
                order.push((jobsite.clone(), Vec::new()));
                order.len() - 1
            });
            let drivers = &mut order[position].1;
            if !drivers.contains(driver) {
                drivers.push(driver.clone());
            }
        }
    }

    order
}
