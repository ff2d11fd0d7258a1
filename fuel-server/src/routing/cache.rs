//! Caching layer for computed routes.
//!
//! Routes between the same pair of cities never change in practice, so they
//! are kept for a day. Keys are the endpoint coordinates in micro-degrees,
//! which avoids hashing floats directly.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;
use super::provider::RouteProvider;

/// Cache key: (start lat, start lon, finish lat, finish lon) in micro-degrees.
type RouteKey = (i64, i64, i64, i64);

fn micro_degrees(value: f64) -> i64 {
    (value * 1e6).round() as i64
}

fn route_key(start: GeoPoint, finish: GeoPoint) -> RouteKey {
    (
        micro_degrees(start.lat()),
        micro_degrees(start.lon()),
        micro_degrees(finish.lat()),
        micro_degrees(finish.lon()),
    )
}

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct RouteCacheConfig {
    /// TTL for cached routes.
    pub ttl: Duration,

    /// Maximum number of cached routes.
    pub max_capacity: u64,
}

impl RouteCacheConfig {
    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Route provider with caching.
///
/// Wraps another provider and caches its successful responses. Failures are
/// not cached.
pub struct CachedRouter<R> {
    inner: R,
    routes: MokaCache<RouteKey, Arc<Route>>,
}

impl<R> CachedRouter<R> {
    /// Create a new cached router.
    pub fn new(inner: R, config: &RouteCacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Invalidate all cached routes.
    pub fn invalidate_cache(&self) {
        self.routes.invalidate_all();
    }
}

impl<R: RouteProvider + Sync> RouteProvider for CachedRouter<R> {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        let key = route_key(start, finish);

        if let Some(cached) = self.routes.get(&key).await {
            debug!("route cache hit");
            return Ok(Route::clone(&cached));
        }

        let route = self.inner.route(start, finish).await?;
        self.routes.insert(key, Arc::new(route.clone())).await;

        Ok(route)
    }
}
