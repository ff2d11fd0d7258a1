//! Application state for the web layer.

use std::sync::Arc;

use crate::routing::{CachedRouter, FallbackRouter, RouteSource};
use crate::stations::InMemoryCatalog;
use crate::trip::TripPlanner;

/// The route provider stack the service runs with.
pub type ServiceRouter = CachedRouter<FallbackRouter<RouteSource>>;

/// The trip planner the service runs with.
pub type ServicePlanner = TripPlanner<ServiceRouter, InMemoryCatalog>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Trip planner with its router, catalog and city directory
    pub planner: Arc<ServicePlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: ServicePlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
