//! Provider fallback chain.

use tracing::{debug, warn};

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;
use super::graphhopper::GraphHopperClient;
use super::osrm::OsrmClient;
use super::provider::RouteProvider;
use super::straight::StaticRouter;

/// One of the routing backends the service can be configured with.
#[derive(Debug, Clone)]
pub enum RouteSource {
    GraphHopper(GraphHopperClient),
    Osrm(OsrmClient),
    Straight(StaticRouter),
}

impl RouteSource {
    pub fn name(&self) -> &'static str {
        match self {
            RouteSource::GraphHopper(_) => "graphhopper",
            RouteSource::Osrm(_) => "osrm",
            RouteSource::Straight(_) => "straight",
        }
    }
}

impl RouteProvider for RouteSource {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        match self {
            RouteSource::GraphHopper(client) => client.route(start, finish).await,
            RouteSource::Osrm(client) => client.route(start, finish).await,
            RouteSource::Straight(router) => router.route(start, finish).await,
        }
    }
}

/// Tries each provider in order and returns the first route found.
///
/// When every provider answers that there is no route, the chain reports
/// [`RouteError::NoRoute`] rather than a provider failure.
#[derive(Debug, Clone)]
pub struct FallbackRouter<R> {
    providers: Vec<(&'static str, R)>,
}

impl<R: RouteProvider> FallbackRouter<R> {
    /// Create a chain from `(name, provider)` pairs, tried in order.
    pub fn new(providers: Vec<(&'static str, R)>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FallbackRouter<RouteSource> {
    /// Chain of configured backends, named after their kind.
    pub fn from_sources(sources: Vec<RouteSource>) -> Self {
        Self::new(sources.into_iter().map(|s| (s.name(), s)).collect())
    }
}

impl<R: RouteProvider + Sync> RouteProvider for FallbackRouter<R> {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        let mut only_no_route = !self.providers.is_empty();

        for (name, provider) in &self.providers {
            match provider.route(start, finish).await {
                Ok(route) => {
                    debug!(provider = name, "route found");
                    return Ok(route);
                }
                Err(e) => {
                    only_no_route &= matches!(e, RouteError::NoRoute);
                    warn!(provider = name, error = %e, "route provider failed");
                }
            }
        }

        if only_no_route {
            return Err(RouteError::NoRoute);
        }
        Err(RouteError::AllProvidersFailed)
    }
}
