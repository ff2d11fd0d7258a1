//! Refuelling planner.
//!
//! This module implements the core planning algorithm that answers:
//! "Can this vehicle drive this route, and where should it refuel to spend
//! the least on fuel?"
//!
//! Everything here is synchronous and pure: it takes a route, a station
//! snapshot and a [`TripConfig`], and builds all of its working state
//! (spatial index, visited set) per call.

mod config;
mod error;
mod estimate;
mod feasibility;
mod finder;
mod index;
mod select;
mod stages;


pub use config::TripConfig;
pub use error::PlanError;
pub use estimate::{SHORT_TRIP_MILES, TripCostEstimator, TripEstimate};
pub use feasibility::{is_feasible, is_feasible_with};
pub use finder::{RadiusGrowth, SearchRadius, StationFinder};
pub use index::SpatialIndex;
pub use select::StationSelector;
pub use stages::{STAGED_MESSAGE, Stage, StagePlan, split_route_into_stages};
