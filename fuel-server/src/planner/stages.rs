//! Staged refuelling for routes the greedy planner cannot complete.
//!
//! The walk refuels whenever range drops below the safety margin, even close
//! to the destination, and searches a wider band around the route than the
//! greedy pass. Stations may be reused across stages.
//!
//! Staging is best-effort: when no station is found at a point that needs
//! one, that stage is skipped and the walk carries on with the low range. The
//! resulting plan can therefore be optimistic about feasibility.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{FuelStation, GeoPoint};

use super::config::TripConfig;
use super::finder::{SearchRadius, StationFinder};

/// Status message attached to every staged plan.
pub const STAGED_MESSAGE: &str = "Trip requires staged refueling";

/// A point on the route where the vehicle refuels to a full tank.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage<'a> {
    /// Route point the station was searched from.
    pub point: GeoPoint,

    pub station: &'a FuelStation,

    /// Range left on arrival at this stage (miles). Negative when the
    /// previous stage was skipped and the tank ran dry on the way.
    pub range_before: f64,
}

/// Result of splitting a route into refuelling stages.
#[derive(Debug, Clone)]
pub struct StagePlan<'a> {
    pub stages: Vec<Stage<'a>>,
    pub message: &'static str,
}

/// Walk the route, recording a stage wherever range drops below the margin.
pub fn split_route_into_stages<'a>(
    route: &[GeoPoint],
    finder: &StationFinder<'a>,
    config: &TripConfig,
) -> StagePlan<'a> {
    let radius = SearchRadius::staged(config);
    let no_visits = HashSet::new();
    let mut stages = Vec::new();
    let mut remaining_range = config.fuel_capacity;

    for pair in route.windows(2) {
        remaining_range -= pair[0].distance_miles(&pair[1]);

        if remaining_range >= config.safety_margin {
            continue;
        }

        match finder.cheapest(&pair[0], &no_visits, &radius) {
            Some(station) => {
                debug!(station = %station.id(), remaining_range, "recorded refuelling stage");
                stages.push(Stage {
                    point: pair[0],
                    station,
                    range_before: remaining_range,
                });
                remaining_range = config.fuel_capacity;
            }
            None => {
                warn!(
                    lat = pair[0].lat(),
                    lon = pair[0].lon(),
                    remaining_range,
                    "no station within staged search radius, skipping stage"
                );
            }
        }
    }

    StagePlan {
        stages,
        message: STAGED_MESSAGE,
    }
}
