//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{PlanStatus, RefuelStop, round_cents};
use crate::planner::STAGED_MESSAGE;
use crate::trip::TripOutcome;

/// Note attached to short trips, which are costed without stops.
pub const ESTIMATED_MESSAGE: &str = "no stations as distance less than 500 miles";

/// Response for a planned trip.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub route_map: RouteMap,

    /// Refuelling stops in route order
    pub optimal_stations: Vec<StationStop>,

    /// Total fuel spend in dollars
    pub total_fuel_cost: f64,

    pub status: PlanStatus,

    /// Human-readable note for staged or estimated plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// The route geometry and its length.
#[derive(Debug, Serialize)]
pub struct RouteMap {
    /// Route points as `[lat, lon]` pairs
    pub coordinates: Vec<(f64, f64)>,

    /// Route length in miles, rounded to 2 decimals
    pub total_distance: f64,
}

/// A refuelling stop in a trip response.
#[derive(Debug, Serialize)]
pub struct StationStop {
    /// Station id (OPIS truckstop id)
    pub station_id: String,

    pub address: String,

    pub price_per_gallon: f64,

    pub miles_from_start: f64,

    /// Cost of the fuel bought here
    pub cost: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&RefuelStop> for StationStop {
    fn from(stop: &RefuelStop) -> Self {
        Self {
            station_id: stop.station_id.to_string(),
            address: stop.address.clone(),
            price_per_gallon: stop.price_per_gallon,
            miles_from_start: stop.distance_from_start,
            cost: stop.cost,
        }
    }
}

impl From<&TripOutcome> for TripResponse {
    fn from(outcome: &TripOutcome) -> Self {
        let plan = &outcome.estimate.plan;
        let message = match plan.status {
            PlanStatus::Staged => Some(STAGED_MESSAGE),
            PlanStatus::Estimated => Some(ESTIMATED_MESSAGE),
            _ => None,
        };

        Self {
            route_map: RouteMap {
                coordinates: outcome.route.points().iter().map(|&p| p.into()).collect(),
                total_distance: round_cents(outcome.estimate.total_distance),
            },
            optimal_stations: plan.stops.iter().map(StationStop::from).collect(),
            total_fuel_cost: plan.total_cost,
            status: plan.status,
            message,
        }
    }
}
