//! Undirected road graph keyed by quantized point identity.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RoutingError;
use crate::geo::{GeoPoint, NodeKey};
use crate::haversine::distance_km;
use crate::network::RoadNetwork;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeKey,
    pub distance_km: f64,
}

/// Adjacency lists plus the first-seen point for every node.
///
/// Parallel edges are kept: a hop listed in two segments yields two edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<NodeKey, Vec<Edge>>,
    points: HashMap<NodeKey, GeoPoint>,
}

impl Graph {
    /// Builds the graph from every consecutive point pair of every segment.
    ///
    /// Fails with [`RoutingError::EmptyNetwork`] when no segment has a hop.
    pub fn build(network: &RoadNetwork) -> Result<Self, RoutingError> {
        let mut graph = Self::default();
        for segment in network.segments() {
            for (from, to) in segment.hops() {
                graph.insert_edge(from, to);
            }
        }

        if graph.adjacency.is_empty() {
            return Err(RoutingError::EmptyNetwork);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built road graph"
        );
        Ok(graph)
    }

    fn insert_edge(&mut self, from: GeoPoint, to: GeoPoint) {
        let distance_km = distance_km(from, to);
        let (from_key, to_key) = (from.key(), to.key());
        self.points.entry(from_key).or_insert(from);
        self.points.entry(to_key).or_insert(to);

        self.adjacency.entry(from_key).or_default().push(Edge {
            to: to_key,
            distance_km,
        });
        self.adjacency.entry(to_key).or_default().push(Edge {
            to: from_key,
            distance_km,
        });
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Outgoing edges of `key`; empty for nodes not in the graph.
    pub fn neighbors(&self, key: &NodeKey) -> &[Edge] {
        self.adjacency
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn point(&self, key: &NodeKey) -> Option<GeoPoint> {
        self.points.get(key).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges, i.e. twice the number of inserted hops.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeKey> {
        self.adjacency.keys()
    }
}
