//! Fuel route planner server.
//!
//! A web service that answers: "Driving from this city to that one, where
//! should I refuel to spend the least on fuel?"

pub mod cities;
pub mod config;
pub mod domain;
pub mod planner;
pub mod routing;
pub mod stations;
pub mod trip;
pub mod web;
