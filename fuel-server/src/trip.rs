//! Trip planning orchestration.
//!
//! Ties the boundary pieces together: resolve both cities, fetch the route,
//! then hand route and catalog to the cost estimator.

use tracing::info;

use crate::cities::{CityDirectory, CityError, TripEndpoints};
use crate::domain::Route;
use crate::planner::{PlanError, TripConfig, TripCostEstimator, TripEstimate};
use crate::routing::{RouteError, RouteProvider};
use crate::stations::StationCatalog;

/// Errors from planning a trip between two cities.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error(transparent)]
    City(#[from] CityError),

    #[error("route lookup failed: {0}")]
    Route(#[from] RouteError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Everything known about a planned trip.
#[derive(Debug, Clone)]
pub struct TripOutcome {
    pub endpoints: TripEndpoints,
    pub route: Route,
    pub estimate: TripEstimate,
}

/// Plans trips between named cities.
pub struct TripPlanner<R, C> {
    router: R,
    catalog: C,
    cities: CityDirectory,
    config: TripConfig,
    average_price: f64,
}

impl<R: RouteProvider, C: StationCatalog> TripPlanner<R, C> {
    /// Create a new trip planner.
    pub fn new(
        router: R,
        catalog: C,
        cities: CityDirectory,
        config: TripConfig,
        average_price: f64,
    ) -> Self {
        Self {
            router,
            catalog,
            cities,
            config,
            average_price,
        }
    }

    /// Plan the trip between two city slugs (e.g. `gila-bend`).
    pub async fn plan(&self, start: &str, finish: &str) -> Result<TripOutcome, TripError> {
        let endpoints = self.cities.resolve_trip(start, finish)?;
        let route = self.router.route(endpoints.start, endpoints.finish).await?;

        let estimate = TripCostEstimator::new(&self.config, self.average_price)
            .estimate(&route, &self.catalog)?;

        info!(
            start = %endpoints.start_name,
            finish = %endpoints.finish_name,
            distance = estimate.total_distance,
            stops = estimate.plan.stops.len(),
            total_cost = estimate.plan.total_cost,
            status = ?estimate.plan.status,
            "planned trip"
        );

        Ok(TripOutcome {
            endpoints,
            route,
            estimate,
        })
    }
}
