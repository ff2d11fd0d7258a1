//! Vehicle and search configuration for the refuelling planner.

use super::error::PlanError;

/// Configuration parameters for a planning call.
///
/// Fuel quantities are expressed as driving range in miles.
#[derive(Debug, Clone, PartialEq)]
pub struct TripConfig {
    /// Range on a full tank (miles).
    pub fuel_capacity: f64,

    /// Fuel efficiency.
    pub miles_per_gallon: f64,

    /// Remaining range below which a refuel is mandatory (miles).
    pub safety_margin: f64,

    /// Initial station search radius (miles).
    pub max_search_distance: f64,
}

impl TripConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        fuel_capacity: f64,
        miles_per_gallon: f64,
        safety_margin: f64,
        max_search_distance: f64,
    ) -> Self {
        Self {
            fuel_capacity,
            miles_per_gallon,
            safety_margin,
            max_search_distance,
        }
    }

    /// Check that every field is strictly positive and finite.
    pub fn validate(&self) -> Result<(), PlanError> {
        let fields = [
            (self.fuel_capacity, "fuel capacity must be positive"),
            (self.miles_per_gallon, "miles per gallon must be positive"),
            (self.safety_margin, "safety margin must be positive"),
            (self.max_search_distance, "max search distance must be positive"),
        ];

        for (value, message) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidConfig(message));
            }
        }

        Ok(())
    }

    /// Upper bound on any station search radius.
    pub fn max_possible_distance(&self) -> f64 {
        self.fuel_capacity * self.miles_per_gallon
    }

    /// Gallons needed to cover `miles` of range.
    pub fn gallons_for(&self, miles: f64) -> f64 {
        miles / self.miles_per_gallon
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            fuel_capacity: 500.0,
            miles_per_gallon: 10.0,
            safety_margin: 50.0,
            max_search_distance: 100.0,
        }
    }
}
