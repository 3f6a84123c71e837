//! A* search over the road graph with a closest-point fallback.
//!
//! When the goal cannot be reached the search still returns the path to the
//! expanded node nearest the goal (by heuristic), flagged incomplete, so the
//! caller can hand the remaining stretch to an external route filler.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::geo::{GeoPoint, NodeKey};
use crate::graph::Graph;
use crate::haversine::distance_km;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Start first; ends at the goal when `complete`, else at the closest node.
    pub path: Vec<GeoPoint>,
    pub complete: bool,
}

/// Open-set entry. Ordered so the max-heap pops the lowest f-cost first and,
/// among equal f-costs, the earliest pushed.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    g: f64,
    seq: u64,
    key: NodeKey,
    point: GeoPoint,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

pub fn search(graph: &Graph, start: GeoPoint, goal: GeoPoint) -> SearchOutcome {
    let start_key = start.key();
    let goal_key = goal.key();

    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<NodeKey, f64> = HashMap::new();
    let mut previous: HashMap<NodeKey, NodeKey> = HashMap::new();
    let mut seq = 0u64;

    best_g.insert(start_key, 0.0);
    open.push(OpenEntry {
        f: 0.0,
        g: 0.0,
        seq,
        key: start_key,
        point: start,
    });

    let mut closest = start_key;
    let mut closest_h = distance_km(start, goal);
    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        let recorded = best_g.get(&current.key).copied().unwrap_or(f64::INFINITY);
        if current.g > recorded {
            // superseded by a cheaper entry for the same node
            continue;
        }
        expanded += 1;

        let h = distance_km(current.point, goal);
        if h < closest_h {
            closest = current.key;
            closest_h = h;
        }

        if current.key == goal_key {
            debug!(expanded, "a* reached goal");
            return SearchOutcome {
                path: reconstruct(graph, &previous, start, current.key),
                complete: true,
            };
        }

        for edge in graph.neighbors(&current.key) {
            let tentative = current.g + edge.distance_km;
            let known = best_g.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                let point = graph.point(&edge.to).unwrap_or_else(|| edge.to.point());
                best_g.insert(edge.to, tentative);
                previous.insert(edge.to, current.key);
                seq += 1;
                open.push(OpenEntry {
                    f: tentative + distance_km(point, goal),
                    g: tentative,
                    seq,
                    key: edge.to,
                    point,
                });
            }
        }
    }

    debug!(expanded, closest = %closest, remaining_km = closest_h, "a* goal unreachable");
    SearchOutcome {
        path: reconstruct(graph, &previous, start, closest),
        complete: false,
    }
}

fn reconstruct(
    graph: &Graph,
    previous: &HashMap<NodeKey, NodeKey>,
    start: GeoPoint,
    end: NodeKey,
) -> Vec<GeoPoint> {
    let start_key = start.key();
    let mut keys = vec![end];
    let mut step = end;
    while let Some(&prev) = previous.get(&step) {
        keys.push(prev);
        step = prev;
    }
    keys.reverse();

    keys.into_iter()
        .map(|key| {
            if key == start_key {
                start
            } else {
                graph.point(&key).unwrap_or_else(|| key.point())
            }
        })
        .collect()
}
