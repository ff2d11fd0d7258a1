//! Geographic primitives: points, routes and bounding regions.
//!
//! All distances are great-circle (haversine) miles.

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

const METERS_PER_MILE: f64 = 1609.344;

/// Mean Earth radius in miles, as used by `geo`'s haversine distance.
pub const EARTH_RADIUS_MILES: f64 = 6_371_008.8 / METERS_PER_MILE;

/// A validated (latitude, longitude) pair in degrees.
///
/// Non-finite or out-of-range values are rejected at construction, so
/// distances computed from a `GeoPoint` are never NaN.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::GeoPoint;
///
/// let tulsa = GeoPoint::new(36.154, -95.993).unwrap();
/// assert_eq!(tulsa.lat(), 36.154);
///
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, 181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point, failing fast on non-finite or out-of-range input.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidCoordinate { lat, lon, reason };

        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(invalid("longitude out of range"));
        }

        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        self.to_point().haversine_distance(&other.to_point()) / METERS_PER_MILE
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = DomainError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        GeoPoint::new(lat, lon)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lon)
    }
}

/// Total length of a polyline in miles.
pub fn route_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_miles(&pair[1]))
        .sum()
}

/// An ordered driving route from start to destination.
///
/// Always holds at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Route(Vec<GeoPoint>);

impl Route {
    /// Create a route, rejecting fewer than two points.
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, DomainError> {
        if points.len() < 2 {
            return Err(DomainError::RouteTooShort(points.len()));
        }
        Ok(Self(points))
    }

    /// The route's points in travel order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    /// Departure point.
    pub fn start(&self) -> GeoPoint {
        self.0[0]
    }

    /// Destination point.
    pub fn finish(&self) -> GeoPoint {
        self.0[self.0.len() - 1]
    }

    /// Total length in miles.
    pub fn length_miles(&self) -> f64 {
        route_length(&self.0)
    }
}

/// A latitude/longitude box used to narrow station catalog queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingRegion {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn around(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };

        Some(points.iter().fold(init, |b, p| Self {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lon: b.min_lon.min(p.lon),
            max_lon: b.max_lon.max(p.lon),
        }))
    }

    /// Grow the box by `degrees` on every side.
    pub fn padded(self, degrees: f64) -> Self {
        Self {
            min_lat: self.min_lat - degrees,
            max_lat: self.max_lat + degrees,
            min_lon: self.min_lon - degrees,
            max_lon: self.max_lon + degrees,
        }
    }

    /// Whether `point` lies inside the box (edges inclusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(90.5, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn nyc_to_la_distance() {
        // Roughly 2,445 miles great-circle
        let nyc = pt(40.7128, -74.0060);
        let la = pt(34.0522, -118.2437);
        let d = nyc.distance_miles(&la);
        assert!((d - 2445.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = pt(0.0, 0.0).distance_miles(&pt(1.0, 0.0));
        assert!((d - 69.09).abs() < 0.1, "got {d}");
    }

    #[test]
    fn radius_matches_haversine() {
        let quarter = pt(0.0, 0.0).distance_miles(&pt(0.0, 90.0));
        assert!((quarter - EARTH_RADIUS_MILES * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn route_length_sums_segments() {
        let points = [pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)];
        let total = route_length(&points);
        let direct = points[0].distance_miles(&points[2]);
        assert!((total - direct).abs() < 1e-6);
        assert_eq!(route_length(&points[..1]), 0.0);
    }

    #[test]
    fn route_requires_two_points() {
        assert_eq!(
            Route::new(vec![pt(0.0, 0.0)]),
            Err(DomainError::RouteTooShort(1))
        );
        assert_eq!(Route::new(vec![]), Err(DomainError::RouteTooShort(0)));

        let route = Route::new(vec![pt(0.0, 0.0), pt(0.0, 1.0)]).unwrap();
        assert_eq!(route.start(), pt(0.0, 0.0));
        assert_eq!(route.finish(), pt(0.0, 1.0));
    }

    #[test]
    fn serde_as_tuple() {
        let p = pt(36.5, -95.2);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[36.5,-95.2]");

        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        assert!(serde_json::from_str::<GeoPoint>("[95.0,0.0]").is_err());
    }

    #[test]
    fn bounding_region() {
        assert!(BoundingRegion::around(&[]).is_none());

        let region = BoundingRegion::around(&[pt(36.0, -95.0), pt(38.0, -84.0)])
            .unwrap()
            .padded(0.1);
        assert!((region.min_lat - 35.9).abs() < 1e-9);
        assert!((region.max_lon - -83.9).abs() < 1e-9);
        assert!(region.contains(&pt(37.0, -90.0)));
        assert!(!region.contains(&pt(40.0, -90.0)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-89.0..89.0f64, -179.0..179.0f64).prop_map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap())
    }

    proptest! {
        /// Distances are symmetric and non-negative
        #[test]
        fn distance_symmetric(a in point(), b in point()) {
            let ab = a.distance_miles(&b);
            let ba = b.distance_miles(&a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// A polyline is never shorter than the straight line between its ends
        #[test]
        fn route_not_shorter_than_chord(points in prop::collection::vec(point(), 2..8)) {
            let total = route_length(&points);
            let chord = points[0].distance_miles(&points[points.len() - 1]);
            prop_assert!(total + 1e-6 >= chord);
        }
    }
}
