//! Route provider trait and shared HTTP plumbing.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can compute a driving route between two points.
///
/// This abstraction allows trip planning to be tested without network access.
pub trait RouteProvider {
    /// Route from `start` to `finish` as an ordered point sequence.
    fn route(
        &self,
        start: GeoPoint,
        finish: GeoPoint,
    ) -> impl Future<Output = Result<Route, RouteError>> + Send;
}

/// Connection settings for an HTTP routing service.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the service, without a trailing slash
    pub base_url: String,
    /// API key, for services that need one
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a config for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client, RouteError> {
        Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?)
    }
}

/// Send `request` and decode a successful JSON response body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, RouteError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RouteError::Api {
            status: status.as_u16(),
            message: body.chars().take(500).collect(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| RouteError::Json {
        message: e.to_string(),
    })
}

/// Build a route from GeoJSON `[lon, lat]` positions.
pub fn route_from_lon_lat(coordinates: &[[f64; 2]]) -> Result<Route, RouteError> {
    let points = coordinates
        .iter()
        .map(|[lon, lat]| GeoPoint::new(*lat, *lon))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(points)?)
}
