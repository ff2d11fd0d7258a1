//! Refuelling plan types.

use serde::Serialize;

use super::station::{FuelStation, StationId};

/// Shown in place of a station's address when the catalog has none.
pub const ADDRESS_PLACEHOLDER: &str = "not specified";

/// Round a monetary amount or distance to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// How a plan was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Greedy pass covered the whole route.
    Complete,
    /// Route was infeasible for the greedy pass; stops come from staged refuelling.
    Staged,
    /// Greedy pass stopped early; stops are valid up to the point of failure.
    Partial,
    /// No station was available to plan with.
    NoStationsAvailable,
    /// Staged refuelling found no stage at all.
    Infeasible,
    /// Short trip costed from an average price, no stops.
    Estimated,
}

/// A single refuelling stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefuelStop {
    pub station_id: StationId,

    /// Station address, or [`ADDRESS_PLACEHOLDER`].
    pub address: String,

    pub price_per_gallon: f64,

    /// Miles from the route start, rounded to 2 decimals.
    pub distance_from_start: f64,

    /// Cost of the fuel bought here, rounded to 2 decimals.
    pub cost: f64,
}

impl RefuelStop {
    /// Create a stop at `station`, rounding distance and cost.
    pub fn new(station: &FuelStation, distance_from_start: f64, cost: f64) -> Self {
        Self {
            station_id: station.id().clone(),
            address: station
                .address()
                .unwrap_or(ADDRESS_PLACEHOLDER)
                .to_string(),
            price_per_gallon: station.price_per_gallon(),
            distance_from_start: round_cents(distance_from_start),
            cost: round_cents(cost),
        }
    }
}

/// The outcome of planning a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    /// Stops in ascending `distance_from_start`.
    pub stops: Vec<RefuelStop>,

    /// Sum of stop costs, rounded to 2 decimals.
    pub total_cost: f64,

    pub status: PlanStatus,
}

impl PlanResult {
    /// A plan with no stops and zero cost.
    pub fn empty(status: PlanStatus) -> Self {
        Self {
            stops: Vec::new(),
            total_cost: 0.0,
            status,
        }
    }

    /// Build a plan from stops, sorting them and totalling their costs.
    pub fn from_stops(mut stops: Vec<RefuelStop>, status: PlanStatus) -> Self {
        stops.sort_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));
        let total_cost = round_cents(stops.iter().map(|s| s.cost).sum());

        Self {
            stops,
            total_cost,
            status,
        }
    }

    /// A stop-less plan with a flat cost.
    pub fn estimated(cost: f64) -> Self {
        Self {
            stops: Vec::new(),
            total_cost: round_cents(cost),
            status: PlanStatus::Estimated,
        }
    }
}
