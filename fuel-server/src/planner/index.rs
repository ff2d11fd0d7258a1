//! Spatial index over station locations.
//!
//! Radius queries use two-stage filtering:
//! 1. **R-tree filter**: a longitude/latitude envelope that is guaranteed to
//!    contain the whole query circle, split in two when it crosses the
//!    antimeridian
//! 2. **Haversine filter**: exact great-circle distance on the survivors
//!
//! The envelope uses the tangent-latitude bound, so no station inside the
//! radius is ever dropped by the first stage.

use rstar::{AABB, RTree, RTreeObject};

use crate::domain::{EARTH_RADIUS_MILES, FuelStation, GeoPoint};

/// Slack added to every envelope edge, in degrees.
const ENVELOPE_SLACK_DEG: f64 = 1e-6;

/// Relative widening of the query circle for the envelope stage.
const ANGULAR_PAD: f64 = 1.001;

/// A station location tagged with its position in the station slice.
#[derive(Debug, Clone, Copy)]
struct IndexedStation {
    idx: usize,
    lon: f64,
    lat: f64,
}

impl RTreeObject for IndexedStation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lon, self.lat])
    }
}

/// Read-only nearest-neighbour structure for one planning call.
///
/// Query results are indices into the station slice the index was built from.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<IndexedStation>,
    locations: Vec<GeoPoint>,
}

impl SpatialIndex {
    /// Build the index from a station snapshot.
    pub fn build(stations: &[FuelStation]) -> Self {
        let locations: Vec<GeoPoint> = stations.iter().map(FuelStation::location).collect();
        let indexed = locations
            .iter()
            .enumerate()
            .map(|(idx, p)| IndexedStation {
                idx,
                lon: p.lon(),
                lat: p.lat(),
            })
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
            locations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Indices of stations within `radius_miles` of `point`, ascending.
    pub fn within_radius(&self, point: &GeoPoint, radius_miles: f64) -> Vec<usize> {
        if self.is_empty() || radius_miles.is_nan() || radius_miles < 0.0 {
            return Vec::new();
        }

        let mut hits: Vec<usize> = search_envelopes(point, radius_miles)
            .iter()
            .flat_map(|envelope| self.tree.locate_in_envelope(envelope))
            .filter(|s| self.locations[s.idx].distance_miles(point) <= radius_miles)
            .map(|s| s.idx)
            .collect();

        hits.sort_unstable();
        hits.dedup();
        hits
    }
}

/// Degree-space boxes covering every point within `radius_miles` of `center`.
fn search_envelopes(center: &GeoPoint, radius_miles: f64) -> Vec<AABB<[f64; 2]>> {
    let angular = radius_miles / EARTH_RADIUS_MILES * ANGULAR_PAD;
    let lat = center.lat().to_radians();
    let lon = center.lon().to_radians();

    let min_lat = lat - angular;
    let max_lat = lat + angular;
    let half_pi = std::f64::consts::FRAC_PI_2;

    // Circle reaches a pole: every longitude is in play.
    if min_lat <= -half_pi || max_lat >= half_pi {
        let lo = min_lat.max(-half_pi).to_degrees() - ENVELOPE_SLACK_DEG;
        let hi = max_lat.min(half_pi).to_degrees() + ENVELOPE_SLACK_DEG;
        return vec![AABB::from_corners([-180.0, lo], [180.0, hi])];
    }

    let delta_lon = (angular.sin() / lat.cos()).asin();
    let lo_lat = min_lat.to_degrees() - ENVELOPE_SLACK_DEG;
    let hi_lat = max_lat.to_degrees() + ENVELOPE_SLACK_DEG;
    let lo_lon = (lon - delta_lon).to_degrees() - ENVELOPE_SLACK_DEG;
    let hi_lon = (lon + delta_lon).to_degrees() + ENVELOPE_SLACK_DEG;

    if hi_lon - lo_lon >= 360.0 {
        return vec![AABB::from_corners([-180.0, lo_lat], [180.0, hi_lat])];
    }

    if lo_lon < -180.0 {
        vec![
            AABB::from_corners([-180.0, lo_lat], [hi_lon, hi_lat]),
            AABB::from_corners([lo_lon + 360.0, lo_lat], [180.0, hi_lat]),
        ]
    } else if hi_lon > 180.0 {
        vec![
            AABB::from_corners([lo_lon, lo_lat], [180.0, hi_lat]),
            AABB::from_corners([-180.0, lo_lat], [hi_lon - 360.0, hi_lat]),
        ]
    } else {
        vec![AABB::from_corners([lo_lon, lo_lat], [hi_lon, hi_lat])]
    }
}
