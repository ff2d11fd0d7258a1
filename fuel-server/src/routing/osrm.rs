//! OSRM route service client.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;
use super::provider::{ProviderConfig, RouteProvider, fetch_json, route_from_lon_lat};

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "http://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: LineString,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<[f64; 2]>,
}

/// Client for the OSRM `route` service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(config: ProviderConfig) -> Result<Self, RouteError> {
        Ok(Self {
            http: config.http_client()?,
            base_url: config.base_url,
        })
    }

    fn url(&self, start: GeoPoint, finish: GeoPoint) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url,
            start.lon(),
            start.lat(),
            finish.lon(),
            finish.lat()
        )
    }
}

impl RouteProvider for OsrmClient {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        let request = self
            .http
            .get(self.url(start, finish))
            .query(&[("overview", "full"), ("geometries", "geojson")]);

        let (status, response): (u16, OsrmResponse) = match fetch_json(request).await {
            // Routing failures come back as 4xx with the usual JSON body.
            Err(RouteError::Api { status, message }) => match serde_json::from_str(&message) {
                Ok(body) => (status, body),
                Err(_) => return Err(RouteError::Api { status, message }),
            },
            other => (reqwest::StatusCode::OK.as_u16(), other?),
        };
        let route = parse_response(status, response)?;
        debug!(points = route.points().len(), "OSRM route");
        Ok(route)
    }
}

/// Interpret a response body received with HTTP `status`.
fn parse_response(status: u16, response: OsrmResponse) -> Result<Route, RouteError> {
    if response.code != "Ok" {
        return match response.code.as_str() {
            "NoRoute" | "NoSegment" => Err(RouteError::NoRoute),
            _ => Err(RouteError::Api {
                status,
                message: response.message.unwrap_or(response.code),
            }),
        };
    }

    let first = response.routes.first().ok_or(RouteError::NoRoute)?;
    route_from_lon_lat(&first.geometry.coordinates)
}
