//! Per-driver registry for presentation overlays.
//!
//! A presentation layer draws markers and route lines per driver and must be
//! able to take them all back when a driver is toggled off. The registry owns
//! the overlay handles; [`OverlayRegistry::remove`] hands them back so the
//! caller can free them.

use std::collections::HashMap;

use crate::traits::Id;

#[derive(Debug, Clone)]
pub struct OverlayRegistry<D, O> {
    overlays: HashMap<D, Vec<O>>,
}

impl<D: Id, O> OverlayRegistry<D, O> {
    pub fn new() -> Self {
        Self {
            overlays: HashMap::new(),
        }
    }

    pub fn add(&mut self, driver: D, overlay: O) {
        self.overlays.entry(driver).or_default().push(overlay);
    }

    pub fn overlays(&self, driver: &D) -> &[O] {
        self.overlays
            .get(driver)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Takes every overlay registered for `driver`, in insertion order.
    pub fn remove(&mut self, driver: &D) -> Vec<O> {
        self.overlays.remove(driver).unwrap_or_default()
    }

    /// Total number of overlays across drivers.
    pub fn len(&self) -> usize {
        self.overlays.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) -> Vec<O> {
        self.overlays.drain().flat_map(|(_, overlays)| overlays).collect()
    }
}

impl<D: Id, O> Default for OverlayRegistry<D, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_returns_only_that_drivers_overlays() {
        let mut registry = OverlayRegistry::new();
        registry.add("driver-1", "marker a");
        registry.add("driver-2", "line b");
        registry.add("driver-1", "line c");

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.remove(&"driver-1"), vec!["marker a", "line c"]);
        assert_eq!(registry.overlays(&"driver-1"), &[] as &[&str]);
        assert_eq!(registry.overlays(&"driver-2"), &["line b"]);
    }

    #[test]
    fn test_remove_unknown_driver_is_empty() {
        let mut registry: OverlayRegistry<&str, u32> = OverlayRegistry::default();
        assert!(registry.remove(&"nobody").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_drains_everything() {
        let mut registry = OverlayRegistry::new();
        registry.add(1, 'a');
        registry.add(2, 'b');
        let mut drained = registry.clear();
        drained.sort();
        assert_eq!(drained, vec!['a', 'b']);
        assert!(registry.is_empty());
    }
}
