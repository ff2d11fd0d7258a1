//! Web layer for the fuel route planner.
//!
//! Provides the HTTP endpoint that plans a trip between two cities.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, ServicePlanner, ServiceRouter};
