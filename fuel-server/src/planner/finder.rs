//! Cheapest-station search with an expanding radius.
//!
//! Every higher-level planner component asks the same question: "what is the
//! cheapest station I haven't used yet, near this point?" The answer is found
//! by querying the spatial index at growing radii until something turns up or
//! the radius schedule is exhausted.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{FuelStation, GeoPoint, StationId};

use super::config::TripConfig;
use super::index::SpatialIndex;

/// How the search radius grows after an empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusGrowth {
    /// Double while doubling stays within half the ceiling, then add `step`.
    Geometric,
    /// Always add `step`.
    Linear,
}

/// The sequence of radii a search tries, in miles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadius {
    pub initial: f64,
    pub step: f64,
    pub ceiling: f64,
    pub growth: RadiusGrowth,
}

impl SearchRadius {
    /// Schedule for the greedy planner and the feasibility probe.
    ///
    /// Starts at `max_search_distance` and may grow up to the furthest a full
    /// tank could ever reach.
    pub fn greedy(config: &TripConfig) -> Self {
        let ceiling = config.max_possible_distance();
        Self {
            initial: config.max_search_distance.min(ceiling),
            step: config.max_search_distance,
            ceiling,
            growth: RadiusGrowth::Geometric,
        }
    }

    /// Schedule for staged refuelling: 3×, 4×, 5× `max_search_distance`.
    pub fn staged(config: &TripConfig) -> Self {
        let step = config.max_search_distance;
        Self {
            initial: 3.0 * step,
            step,
            ceiling: 5.0 * step,
            growth: RadiusGrowth::Linear,
        }
    }

    /// The radius to try after an empty query at `radius`, if any.
    ///
    /// Growth is capped at the ceiling and the ceiling is tried once. A
    /// schedule that stops growing (zero radius or step, NaN) ends.
    fn next(&self, radius: f64) -> Option<f64> {
        if radius >= self.ceiling {
            return None;
        }

        let grown = match self.growth {
            RadiusGrowth::Geometric if radius * 2.0 <= self.ceiling / 2.0 => radius * 2.0,
            _ => radius + self.step,
        };

        if grown.is_nan() || grown <= radius {
            return None;
        }
        Some(grown.min(self.ceiling))
    }

    /// All radii in order.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        let first = Some(self.initial).filter(|r| *r <= self.ceiling);
        std::iter::successors(first, move |r| self.next(*r))
    }
}

/// Cheapest-station lookup over one station snapshot.
///
/// Owns the spatial index for a single planning call.
#[derive(Debug)]
pub struct StationFinder<'a> {
    stations: &'a [FuelStation],
    index: SpatialIndex,
}

impl<'a> StationFinder<'a> {
    /// Build the index for `stations`.
    pub fn new(stations: &'a [FuelStation]) -> Self {
        Self {
            stations,
            index: SpatialIndex::build(stations),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Find the cheapest station near `point` whose id is not in `visited`.
    ///
    /// Candidates are ranked by price, then distance to `point`, then id.
    /// Returns `None` once every radius in `radius` has come up empty.
    /// `visited` is never modified.
    pub fn cheapest(
        &self,
        point: &GeoPoint,
        visited: &HashSet<StationId>,
        radius: &SearchRadius,
    ) -> Option<&'a FuelStation> {
        if self.is_empty() {
            return None;
        }

        for r in radius.radii() {
            let best = self
                .index
                .within_radius(point, r)
                .into_iter()
                .map(|idx| &self.stations[idx])
                .filter(|s| !visited.contains(s.id()))
                .map(|s| (s, s.location().distance_miles(point)))
                .min_by(|a, b| rank(a, b));

            if let Some((station, distance)) = best {
                trace!(
                    station = %station.id(),
                    price = station.price_per_gallon(),
                    distance,
                    radius = r,
                    "found station"
                );
                return Some(station);
            }
        }

        debug!(
            lat = point.lat(),
            lon = point.lon(),
            ceiling = radius.ceiling,
            "station search exhausted"
        );
        None
    }
}

fn rank(a: &(&FuelStation, f64), b: &(&FuelStation, f64)) -> Ordering {
    a.0.price_per_gallon()
        .total_cmp(&b.0.price_per_gallon())
        .then(a.1.total_cmp(&b.1))
        .then_with(|| a.0.id().cmp(b.0.id()))
}
