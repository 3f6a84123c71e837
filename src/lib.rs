//! fleet-router core
//!
//! Shortest paths over a sparse road graph with an external fill for the
//! unreachable remainder, and certification-aware jobsite assignment with
//! greedy load balancing.

pub mod error;
pub mod geo;
pub mod haversine;
pub mod polyline;
pub mod network;
pub mod graph;
pub mod astar;
pub mod traits;
pub mod route;
pub mod onemap;
pub mod assignment;
pub mod matcher;
pub mod balance;
pub mod dispatch;
pub mod input;
pub mod overlay;

pub use error::{FillError, RoutingError};
pub use geo::{GeoPoint, NodeKey};
