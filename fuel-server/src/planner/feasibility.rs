//! Trip feasibility simulation.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{FuelStation, GeoPoint, route_length};

use super::config::TripConfig;
use super::finder::{SearchRadius, StationFinder};

/// Check whether the trip can be driven with full-tank refuels.
///
/// Builds its own index; see [`is_feasible_with`] to reuse one.
pub fn is_feasible(route: &[GeoPoint], stations: &[FuelStation], config: &TripConfig) -> bool {
    is_feasible_with(route, &StationFinder::new(stations), config)
}

/// Simulate the trip, refilling to a full tank wherever range drops below
/// the safety margin away from the destination.
///
/// Each refuel is only a probe ("is there any candidate here?"), so the
/// search never excludes previously used stations.
pub fn is_feasible_with(route: &[GeoPoint], finder: &StationFinder<'_>, config: &TripConfig) -> bool {
    if finder.is_empty() {
        debug!("no stations available for trip simulation");
        return false;
    }

    let radius = SearchRadius::greedy(config);
    let no_visits = HashSet::new();
    let mut remaining_range = config.fuel_capacity;
    let mut remaining_to_end = route_length(route);

    for pair in route.windows(2) {
        let segment = pair[0].distance_miles(&pair[1]);
        remaining_range -= segment;
        remaining_to_end -= segment;

        if remaining_range < config.safety_margin && remaining_to_end > config.safety_margin {
            if finder.cheapest(&pair[0], &no_visits, &radius).is_none() {
                debug!(remaining_to_end, "no station found when needed during trip simulation");
                return false;
            }
            remaining_range = config.fuel_capacity;
        }
    }

    true
}
