//! Planner error types.

use crate::domain::DomainError;

/// Errors that stop a planning call before any stop is chosen.
///
/// Running out of candidate stations is not an error: it is folded into
/// the plan's [`PlanStatus`](crate::domain::PlanStatus).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Route has fewer than two points
    #[error("invalid route: need at least 2 points, got {points}")]
    InvalidRoute { points: usize },

    /// A configuration value is out of range
    #[error("invalid trip configuration: {0}")]
    InvalidConfig(&'static str),

    /// Input failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
