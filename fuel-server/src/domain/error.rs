//! Domain error types.
//!
//! These errors represent validation failures when constructing domain
//! values. They are distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude/longitude pair is non-finite or out of range
    #[error("invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate {
        lat: f64,
        lon: f64,
        reason: &'static str,
    },

    /// Station record failed validation
    #[error("invalid station: {0}")]
    InvalidStation(&'static str),

    /// Route has fewer than two points
    #[error("route must have at least 2 points, got {0}")]
    RouteTooShort(usize),
}
