//! Offline straight-line routing.

use crate::domain::{GeoPoint, Route};

use super::error::RouteError;
use super::provider::RouteProvider;

/// Default spacing between interpolated points (miles).
const DEFAULT_STEP_MILES: f64 = 25.0;

/// Routes by interpolating a straight line between the endpoints.
///
/// Used for offline mode and tests. Interpolation is linear in degrees, with
/// points no more than `step_miles` apart.
#[derive(Debug, Clone, Copy)]
pub struct StaticRouter {
    step_miles: f64,
}

impl StaticRouter {
    pub fn new(step_miles: f64) -> Self {
        Self { step_miles }
    }

    /// Route between two points without I/O.
    pub fn straight(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        let distance = start.distance_miles(&finish);
        let steps = if self.step_miles > 0.0 {
            (distance / self.step_miles).ceil().max(1.0) as usize
        } else {
            1
        };

        let points = (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                GeoPoint::new(
                    start.lat() + (finish.lat() - start.lat()) * t,
                    start.lon() + (finish.lon() - start.lon()) * t,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route::new(points)?)
    }
}

impl Default for StaticRouter {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_MILES)
    }
}

impl RouteProvider for StaticRouter {
    async fn route(&self, start: GeoPoint, finish: GeoPoint) -> Result<Route, RouteError> {
        self.straight(start, finish)
    }
}
