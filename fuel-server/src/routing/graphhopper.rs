//! GraphHopper routing API client.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;
use super::provider::{ProviderConfig, RouteProvider, fetch_json, route_from_lon_lat};

/// Hosted GraphHopper API.
pub const DEFAULT_GRAPHHOPPER_URL: &str = "https://graphhopper.com/api/1";

#[derive(Debug, Deserialize)]
struct GraphHopperResponse {
    #[serde(default)]
    paths: Vec<GraphHopperPath>,
}

#[derive(Debug, Deserialize)]
struct GraphHopperPath {
    points: LineString,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<[f64; 2]>,
}

/// Client for the GraphHopper `route` endpoint.
///
/// Requests unencoded points so the geometry arrives as GeoJSON.
#[derive(Debug, Clone)]
pub struct GraphHopperClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GraphHopperClient {
    /// Create a client. The config must carry an API key.
    pub fn new(config: ProviderConfig) -> Result<Self, RouteError> {
        let api_key = config.api_key.clone().ok_or_else(|| RouteError::Api {
            status: 0,
            message: "GraphHopper requires an API key".to_string(),
        })?;

        Ok(Self {
            http: config.http_client()?,
            base_url: config.base_url,
            api_key,
        })
    }

    fn query(&self, start: GeoPoint, finish: GeoPoint) -> Vec<(&'static str, String)> {
        vec![
            ("point", format!("{},{}", start.lat(), start.lon())),
            ("point", format!("{},{}", finish.lat(), finish.lon())),
            ("profile", "car".to_string()),
            ("locale", "en".to_string()),
            ("calc_points", "true".to_string()),
            ("points_encoded", "false".to_string()),
            ("key", self.api_key.clone()),
        ]
    }
}

impl RouteProvider for GraphHopperClient {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        let request = self
            .http
            .get(format!("{}/route", self.base_url))
            .query(&self.query(start, finish));

        let response: GraphHopperResponse = fetch_json(request).await?;
        let route = parse_response(response)?;
        debug!(points = route.points().len(), "GraphHopper route");
        Ok(route)
    }
}

fn parse_response(response: GraphHopperResponse) -> Result<Route, RouteError> {
    let first = response.paths.first().ok_or(RouteError::NoRoute)?;
    route_from_lon_lat(&first.points.coordinates)
}
