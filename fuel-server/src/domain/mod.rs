//! Domain types for the fuel route planner.
//!
//! This module contains the validated value types shared by the planner
//! and the service boundary. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod location;
mod plan;
mod station;

pub use error::DomainError;
pub use location::{BoundingRegion, EARTH_RADIUS_MILES, GeoPoint, Route, route_length};
pub use plan::{ADDRESS_PLACEHOLDER, PlanResult, PlanStatus, RefuelStop, round_cents};
pub use station::{FuelStation, InvalidStationId, StationId};
