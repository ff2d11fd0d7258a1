//! Refuelling stop selection.
//!
//! The selector answers: "where should this vehicle stop, and how much should
//! it buy, to drive this route as cheaply as possible?"
//!
//! Feasible routes get a greedy pass: fill up at the cheapest station near
//! the start, then top up at the cheapest unvisited station whenever range
//! drops below the safety margin. Routes the feasibility simulation rejects
//! fall back to [staged refuelling](super::stages).

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::{FuelStation, GeoPoint, PlanResult, PlanStatus, RefuelStop, route_length};

use super::config::TripConfig;
use super::error::PlanError;
use super::feasibility::is_feasible_with;
use super::finder::{SearchRadius, StationFinder};
use super::stages::{StagePlan, split_route_into_stages};

/// Chooses refuelling stops for a route.
pub struct StationSelector<'a> {
    config: &'a TripConfig,
}

impl<'a> StationSelector<'a> {
    pub fn new(config: &'a TripConfig) -> Self {
        Self { config }
    }

    /// Plan refuelling stops along `route` using `stations`.
    ///
    /// Errors only on invalid input. Running out of stations is reported
    /// through the returned plan's status.
    pub fn plan(
        &self,
        route: &[GeoPoint],
        stations: &[FuelStation],
    ) -> Result<PlanResult, PlanError> {
        self.config.validate()?;

        if route.len() < 2 {
            return Err(PlanError::InvalidRoute {
                points: route.len(),
            });
        }

        if stations.is_empty() {
            debug!("no stations to plan with");
            return Ok(PlanResult::empty(PlanStatus::NoStationsAvailable));
        }

        let finder = StationFinder::new(stations);

        if is_feasible_with(route, &finder, self.config) {
            Ok(self.greedy(route, &finder))
        } else {
            info!(
                points = route.len(),
                stations = stations.len(),
                "route infeasible with greedy refuelling, staging"
            );
            let staged = split_route_into_stages(route, &finder, self.config);
            Ok(self.staged_plan(route, &staged))
        }
    }

    fn greedy(&self, route: &[GeoPoint], finder: &StationFinder<'_>) -> PlanResult {
        let config = self.config;
        let radius = SearchRadius::greedy(config);
        let mut visited = HashSet::new();

        let Some(first) = finder.cheapest(&route[0], &visited, &radius) else {
            debug!("no station near the route start");
            return PlanResult::empty(PlanStatus::NoStationsAvailable);
        };

        let fill_cost = config.gallons_for(config.fuel_capacity) * first.price_per_gallon();
        let mut stops = vec![RefuelStop::new(first, 0.0, fill_cost)];

        let mut remaining_range = config.fuel_capacity;
        let mut remaining_to_end = route_length(route);
        let mut travelled = 0.0;

        for pair in route.windows(2) {
            let segment = pair[0].distance_miles(&pair[1]);
            travelled += segment;
            remaining_range -= segment;
            remaining_to_end -= segment;

            if remaining_range >= config.safety_margin || remaining_to_end <= config.safety_margin {
                continue;
            }

            let Some(station) = finder.cheapest(&pair[0], &visited, &radius) else {
                warn!(
                    travelled,
                    remaining_to_end,
                    stops = stops.len(),
                    "no unvisited station in reach, returning partial plan"
                );
                return PlanResult::from_stops(stops, PlanStatus::Partial);
            };

            visited.insert(station.id().clone());

            let fuel_needed = config.fuel_capacity.min(remaining_to_end) - remaining_range;
            if fuel_needed > 0.0 {
                let cost = config.gallons_for(fuel_needed) * station.price_per_gallon();
                remaining_range += fuel_needed;
                debug!(station = %station.id(), travelled, fuel_needed, cost, "refuelling stop");
                stops.push(RefuelStop::new(station, travelled, cost));
            }
        }

        PlanResult::from_stops(stops, PlanStatus::Complete)
    }

    fn staged_plan(&self, route: &[GeoPoint], staged: &StagePlan<'_>) -> PlanResult {
        if staged.stages.is_empty() {
            warn!(message = staged.message, "no refuelling stage could be reached");
            return PlanResult::empty(PlanStatus::Infeasible);
        }

        let config = self.config;
        let start = route[0];
        let stops = staged
            .stages
            .iter()
            .map(|stage| {
                let purchased = config.fuel_capacity - stage.range_before.max(0.0);
                let cost = config.gallons_for(purchased) * stage.station.price_per_gallon();
                RefuelStop::new(stage.station, start.distance_miles(&stage.point), cost)
            })
            .collect();

        PlanResult::from_stops(stops, PlanStatus::Staged)
    }
}
