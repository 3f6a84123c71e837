//! Ordered driver → jobsite mapping shared by the matcher and balancer.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::traits::Id;

/// Driver → jobsites, iterated in driver insertion order.
///
/// Inserting an existing driver replaces its list but keeps its position.
#[derive(Debug, Clone)]
pub struct Assignment<D, J> {
    entries: Vec<(D, Vec<J>)>,
    index: HashMap<D, usize>,
}

impl<D: Id, J: Id> Assignment<D, J> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn insert(&mut self, driver: D, jobsites: Vec<J>) {
        match self.index.get(&driver) {
            Some(&position) => self.entries[position].1 = jobsites,
            None => {
                self.index.insert(driver.clone(), self.entries.len());
                self.entries.push((driver, jobsites));
            }
        }
    }

    /// Appends one jobsite to `driver`, registering the driver if needed.
    pub fn push(&mut self, driver: &D, jobsite: J) {
        match self.index.get(driver) {
            Some(&position) => self.entries[position].1.push(jobsite),
            None => self.insert(driver.clone(), vec![jobsite]),
        }
    }

    pub fn get(&self, driver: &D) -> Option<&[J]> {
        self.index
            .get(driver)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Number of jobsites held by `driver`; zero for unknown drivers.
    pub fn load(&self, driver: &D) -> usize {
        self.get(driver).map_or(0, <[J]>::len)
    }

    pub fn contains_jobsite(&self, jobsite: &J) -> bool {
        self.entries.iter().any(|(_, sites)| sites.contains(jobsite))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&D, &[J])> {
        self.entries
            .iter()
            .map(|(driver, sites)| (driver, sites.as_slice()))
    }

    pub fn drivers(&self) -> impl Iterator<Item = &D> {
        self.entries.iter().map(|(driver, _)| driver)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(D, Vec<J>)> {
        self.entries
    }
}

impl<D: Id, J: Id> Default for Assignment<D, J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Id, J: Id> FromIterator<(D, Vec<J>)> for Assignment<D, J> {
    fn from_iter<I: IntoIterator<Item = (D, Vec<J>)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (driver, jobsites) in iter {
            assignment.insert(driver, jobsites);
        }
        assignment
    }
}

impl<D: PartialEq, J: PartialEq> PartialEq for Assignment<D, J> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<D: Eq, J: Eq> Eq for Assignment<D, J> {}

/// Serialized as a JSON-style object in driver order.
impl<D: Serialize, J: Serialize> Serialize for Assignment<D, J> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (driver, jobsites) in &self.entries {
            map.serialize_entry(driver, jobsites)?;
        }
        map.end()
    }
}
