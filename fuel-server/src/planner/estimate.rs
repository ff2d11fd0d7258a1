//! Trip cost estimation.

use tracing::debug;

use crate::domain::{PlanResult, Route};
use crate::stations::StationCatalog;

use super::config::TripConfig;
use super::error::PlanError;
use super::select::StationSelector;

/// Trips up to this length (miles) are costed from the average price alone.
pub const SHORT_TRIP_MILES: f64 = 500.0;

/// Route length plus the refuelling plan for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripEstimate {
    /// Route length in miles.
    pub total_distance: f64,

    pub plan: PlanResult,
}

/// Top-level cost estimator for a route.
///
/// Short trips never touch the station catalog.
pub struct TripCostEstimator<'a> {
    config: &'a TripConfig,
    average_price: f64,
}

impl<'a> TripCostEstimator<'a> {
    pub fn new(config: &'a TripConfig, average_price: f64) -> Self {
        Self {
            config,
            average_price,
        }
    }

    /// Estimate the fuel cost of driving `route`.
    pub fn estimate<C>(&self, route: &Route, catalog: &C) -> Result<TripEstimate, PlanError>
    where
        C: StationCatalog + ?Sized,
    {
        self.config.validate()?;

        let total_distance = route.length_miles();

        if total_distance <= SHORT_TRIP_MILES {
            let cost = self.config.gallons_for(total_distance) * self.average_price;
            debug!(total_distance, cost, "short trip, using average price");
            return Ok(TripEstimate {
                total_distance,
                plan: PlanResult::estimated(cost),
            });
        }

        let stations = catalog.stations_near(route);
        debug!(
            total_distance,
            stations = stations.len(),
            "planning refuelling stops"
        );

        let plan = StationSelector::new(self.config).plan(route.points(), &stations)?;

        Ok(TripEstimate {
            total_distance,
            plan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundingRegion, FuelStation, GeoPoint, PlanStatus, StationId};
    use std::sync::Mutex;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn station(id: &str, price: f64, lat: f64, lon: f64) -> FuelStation {
        FuelStation::new(StationId::parse(id).unwrap(), None, price, pt(lat, lon)).unwrap()
    }

    fn northbound(n: usize) -> Route {
        Route::new((0..=n).map(|i| pt(30.0 + i as f64, -95.0)).collect()).unwrap()
    }

    /// Catalog that records how often it is queried.
    struct CountingCatalog {
        stations: Vec<FuelStation>,
        queries: Mutex<usize>,
    }

    impl CountingCatalog {
        fn new(stations: Vec<FuelStation>) -> Self {
            Self {
                stations,
                queries: Mutex::new(0),
            }
        }

        fn queries(&self) -> usize {
            *self.queries.lock().unwrap()
        }
    }

    impl StationCatalog for CountingCatalog {
        fn stations(&self, region: Option<&BoundingRegion>) -> Vec<FuelStation> {
            *self.queries.lock().unwrap() += 1;
            self.stations
                .iter()
                .filter(|s| region.is_none_or(|r| r.contains(&s.location())))
                .cloned()
                .collect()
        }
    }

    #[test]
    fn short_trip_uses_average_price() {
        // ~345 miles at 10 mpg and $3.50
        let route = northbound(5);
        let catalog = CountingCatalog::new(vec![station("a", 3.0, 31.0, -95.0)]);
        let config = TripConfig::default();

        let estimate = TripCostEstimator::new(&config, 3.50)
            .estimate(&route, &catalog)
            .unwrap();

        assert_eq!(catalog.queries(), 0);
        assert_eq!(estimate.plan.status, PlanStatus::Estimated);
        assert!(estimate.plan.stops.is_empty());

        let expected = route.length_miles() / 10.0 * 3.50;
        assert!((estimate.plan.total_cost - expected).abs() < 0.006);
        assert_eq!(estimate.total_distance, route.length_miles());
    }

    #[test]
    fn long_trip_queries_catalog_and_plans() {
        let route = northbound(11);
        let catalog = CountingCatalog::new(vec![
            station("start", 3.00, 30.05, -95.0),
            station("mid", 4.00, 36.05, -95.0),
        ]);
        let config = TripConfig::default();

        let estimate = TripCostEstimator::new(&config, 3.50)
            .estimate(&route, &catalog)
            .unwrap();

        assert_eq!(catalog.queries(), 1);
        assert_eq!(estimate.plan.status, PlanStatus::Complete);
        assert_eq!(estimate.plan.stops.len(), 2);
        assert!(estimate.total_distance > SHORT_TRIP_MILES);
    }

    #[test]
    fn long_trip_falls_back_to_whole_catalog() {
        // Nothing near the route: the catalog is queried twice and the
        // distant station is still offered to the planner.
        let route = northbound(11);
        let catalog = CountingCatalog::new(vec![station("far", 3.00, 30.0, -80.0)]);
        let config = TripConfig::default();

        let estimate = TripCostEstimator::new(&config, 3.50)
            .estimate(&route, &catalog)
            .unwrap();

        assert_eq!(catalog.queries(), 2);
        assert_ne!(estimate.plan.status, PlanStatus::NoStationsAvailable);
    }

    #[test]
    fn long_trip_with_empty_catalog() {
        let catalog = CountingCatalog::new(Vec::new());
        let config = TripConfig::default();

        let estimate = TripCostEstimator::new(&config, 3.50)
            .estimate(&northbound(11), &catalog)
            .unwrap();

        assert_eq!(estimate.plan, PlanResult::empty(PlanStatus::NoStationsAvailable));
    }
}
