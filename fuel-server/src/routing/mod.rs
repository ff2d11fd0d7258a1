//! Driving route providers.
//!
//! Routes come from an HTTP routing service (GraphHopper, then OSRM as a
//! fallback), or from straight-line interpolation when running offline.
//! Successful routes are cached for a day.

mod cache;
mod error;
mod fallback;
mod graphhopper;
mod osrm;
mod provider;
mod straight;

pub use cache::{CachedRouter, RouteCacheConfig};
pub use error::RouteError;
pub use fallback::{FallbackRouter, RouteSource};
pub use graphhopper::{DEFAULT_GRAPHHOPPER_URL, GraphHopperClient};
pub use osrm::{DEFAULT_OSRM_URL, OsrmClient};
pub use provider::{ProviderConfig, RouteProvider, route_from_lon_lat};
pub use straight::StaticRouter;
