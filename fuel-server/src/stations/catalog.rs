//! Station catalog trait and the in-memory snapshot.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{BoundingRegion, FuelStation, Route};

/// Degrees added around a route's bounding box when querying stations.
pub const ROUTE_REGION_PADDING_DEG: f64 = 0.1;

/// Read access to fuel station data.
///
/// This abstraction allows the estimator to be tested with counting or
/// canned catalogs.
pub trait StationCatalog {
    /// Stations inside `region`, or every station for `None`.
    fn stations(&self, region: Option<&BoundingRegion>) -> Vec<FuelStation>;

    /// Stations around `route`.
    ///
    /// Uses the route's bounding box padded by [`ROUTE_REGION_PADDING_DEG`];
    /// when nothing lies inside it the whole catalog is returned instead.
    fn stations_near(&self, route: &Route) -> Vec<FuelStation> {
        let region = BoundingRegion::around(route.points())
            .map(|b| b.padded(ROUTE_REGION_PADDING_DEG));

        let nearby = self.stations(region.as_ref());
        if !nearby.is_empty() {
            return nearby;
        }

        debug!("no stations inside route region, using whole catalog");
        self.stations(None)
    }
}

/// A catalog backed by an immutable station snapshot.
///
/// Cheap to clone: clones share the snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    stations: Arc<[FuelStation]>,
}

impl InMemoryCatalog {
    pub fn new(stations: Vec<FuelStation>) -> Self {
        Self {
            stations: stations.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Mean price per gallon over the snapshot, `None` when empty.
    pub fn average_price(&self) -> Option<f64> {
        if self.stations.is_empty() {
            return None;
        }

        let sum: f64 = self.stations.iter().map(FuelStation::price_per_gallon).sum();
        Some(sum / self.stations.len() as f64)
    }
}

impl StationCatalog for InMemoryCatalog {
    fn stations(&self, region: Option<&BoundingRegion>) -> Vec<FuelStation> {
        match region {
            Some(region) => self
                .stations
                .iter()
                .filter(|s| region.contains(&s.location()))
                .cloned()
                .collect(),
            None => self.stations.to_vec(),
        }
    }
}
