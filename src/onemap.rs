//! OneMap HTTP adapter for filling route gaps.
//!
//! Each fill fetches a fresh access token and then one driving route. The
//! waypoints are taken from the route instructions, which are heterogeneous
//! JSON arrays carrying a `"lat,lon"` string at [`WAYPOINT_FIELD`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FillError;
use crate::geo::GeoPoint;
use crate::traits::RouteFiller;

/// Position of the waypoint string inside a route instruction.
pub const WAYPOINT_FIELD: usize = 3;

const TOKEN_PATH: &str = "/api/auth/post/getToken";
const ROUTE_PATH: &str = "/api/public/routingsvc/route";

pub const EMAIL_ENV: &str = "ONEMAP_EMAIL";
pub const PASSWORD_ENV: &str = "ONEMAP_PASSWORD";

#[derive(Debug, Clone)]
pub struct OneMapConfig {
    pub base_url: String,
    pub route_type: String,
    pub timeout_secs: u64,
}

impl Default for OneMapConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.onemap.gov.sg".to_string(),
            route_type: "drive".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reads `{"email": ..., "password": ...}` from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FillError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| FillError::Credentials(format!("{}: {err}", path.display())))?;
        serde_json::from_str(&json)
            .map_err(|err| FillError::Credentials(format!("{}: {err}", path.display())))
    }

    /// Reads [`EMAIL_ENV`] and [`PASSWORD_ENV`].
    pub fn from_env() -> Result<Self, FillError> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| FillError::Credentials(format!("{name} is not set")))
        };
        Ok(Self::new(read(EMAIL_ENV)?, read(PASSWORD_ENV)?))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct OneMapClient {
    config: OneMapConfig,
    credentials: Credentials,
    client: reqwest::Client,
}

impl OneMapClient {
    pub fn new(config: OneMapConfig, credentials: Credentials) -> Result<Self, FillError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            credentials,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_token(&self) -> Result<String, FillError> {
        let response = self
            .client
            .post(self.url(TOKEN_PATH))
            .json(&self.credentials)
            .send()
            .await?;

        let status = response.status();
        if matches!(status.as_u16(), 401 | 403) {
            return Err(FillError::Authentication {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FillError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|err| FillError::MalformedResponse(format!("token response: {err}")))?;
        Ok(token.access_token)
    }

    async fn fetch_route(
        &self,
        token: &str,
        from: GeoPoint,
        to: GeoPoint,
    ) -> Result<RouteResponse, FillError> {
        let response = self
            .client
            .get(self.url(ROUTE_PATH))
            .query(&[
                ("start", coordinate_param(from)),
                ("end", coordinate_param(to)),
                ("routeType", self.config.route_type.clone()),
            ])
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FillError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|err| FillError::MalformedResponse(format!("route response: {err}")))
    }
}

impl RouteFiller for OneMapClient {
    async fn fill(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, FillError> {
        let token = self.fetch_token().await?;
        let route = self.fetch_route(&token, from, to).await?;
        let points = waypoints(route)?;
        debug!(waypoints = points.len(), "onemap route received");
        Ok(points)
    }
}

fn coordinate_param(point: GeoPoint) -> String {
    format!("{},{}", point.lat, point.lon)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    route_instructions: Option<Vec<Vec<serde_json::Value>>>,
}

fn waypoints(route: RouteResponse) -> Result<Vec<GeoPoint>, FillError> {
    let instructions = route
        .route_instructions
        .ok_or_else(|| FillError::MalformedResponse("missing route_instructions".to_string()))?;

    instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| {
            let field = instruction
                .get(WAYPOINT_FIELD)
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    FillError::MalformedResponse(format!("instruction {index} has no waypoint"))
                })?;
            field.parse::<GeoPoint>().map_err(|err| {
                FillError::MalformedResponse(format!("instruction {index}: {err}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> RouteResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_waypoints_read_fixed_field() {
        let route = response(
            r#"{"route_instructions": [
                ["Head", "JURONG WEST ST 91", 120, "1.340781,103.689575", 17, "120m"],
                ["Right", "JURONG WEST AVE 2", 300, "1.341122,103.692410", 40, "300m"]
            ]}"#,
        );
        let points = waypoints(route).unwrap();
        assert_eq!(
            points,
            vec![
                GeoPoint::new(1.340781, 103.689575).unwrap(),
                GeoPoint::new(1.341122, 103.69241).unwrap(),
            ]
        );
    }

    #[test]
    fn test_empty_instructions_yield_no_waypoints() {
        let points = waypoints(response(r#"{"route_instructions": []}"#)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_missing_instructions_is_malformed() {
        let err = waypoints(response(r#"{"status": 404}"#)).unwrap_err();
        assert!(matches!(err, FillError::MalformedResponse(_)));
    }

    #[test]
    fn test_short_instruction_is_malformed() {
        let err = waypoints(response(r#"{"route_instructions": [["Head", "X", 1]]}"#)).unwrap_err();
        assert!(matches!(err, FillError::MalformedResponse(msg) if msg.contains("instruction 0")));
    }

    #[test]
    fn test_unparsable_waypoint_is_malformed() {
        let err = waypoints(response(
            r#"{"route_instructions": [["Head", "X", 1, "somewhere"]]}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FillError::MalformedResponse(_)));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("ops@example.com", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("ops@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_missing_file() {
        let err = Credentials::from_json_file("/nonexistent/credentials.json").unwrap_err();
        assert!(matches!(err, FillError::Credentials(_)));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = OneMapConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..OneMapConfig::default()
        };
        let client = OneMapClient::new(config, Credentials::new("a", "b")).unwrap();
        assert_eq!(
            client.url(ROUTE_PATH),
            "http://127.0.0.1:9000/api/public/routingsvc/route"
        );
    }
}
