//! Error types for routing and route filling.

use thiserror::Error;

/// Failures raised while reading road data or building the search graph.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid coordinate {input:?}")]
    InvalidCoordinate { input: String },

    #[error("road network has no edges")]
    EmptyNetwork,

    #[error("failed to read road network: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse road network: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoutingError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            input: input.into(),
        }
    }
}

/// Failures raised by an external route filler.
///
/// Route composition treats every variant as "no fill available".
#[derive(Debug, Error)]
pub enum FillError {
    #[error("failed to load routing credentials: {0}")]
    Credentials(String),

    #[error("authentication rejected with status {status}")]
    Authentication { status: u16 },

    #[error("routing request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("routing service responded with status {status}")]
    Status { status: u16 },

    #[error("malformed routing response: {0}")]
    MalformedResponse(String),
}
