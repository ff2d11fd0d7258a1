//! City name → coordinate lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::GeoPoint;

use super::error::{CityError, DirectoryError};
use super::names::{format_city_name, validate_slug};

/// A city record as stored in the directory file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Case-insensitive lookup from city display name to location.
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    by_name: HashMap<String, GeoPoint>,
}

impl CityDirectory {
    /// Build a directory from `(name, location)` pairs. Later names win.
    pub fn new(cities: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        Self {
            by_name: cities
                .into_iter()
                .map(|(name, point)| (normalize(&name), point))
                .collect(),
        }
    }

    /// Parse a JSON array of city records.
    ///
    /// Records with invalid coordinates are skipped.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<CityRecord> =
            serde_json::from_str(json).map_err(|e| DirectoryError::Json {
                message: e.to_string(),
            })?;

        let cities = records.into_iter().filter_map(|r| {
            match GeoPoint::new(r.latitude, r.longitude) {
                Ok(point) => Some((r.city, point)),
                Err(e) => {
                    warn!(city = %r.city, error = %e, "skipping city record");
                    None
                }
            }
        });

        let directory = Self::new(cities);
        info!(cities = directory.len(), "loaded city directory");
        Ok(directory)
    }

    /// Load the directory from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Look up a city by display name.
    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// Resolve the start and finish slugs of a trip request.
    ///
    /// Checks slug format, rejects identical cities, then looks both up.
    pub fn resolve_trip(&self, start: &str, finish: &str) -> Result<TripEndpoints, CityError> {
        validate_slug(start)?;
        validate_slug(finish)?;

        let start_name = format_city_name(start);
        let finish_name = format_city_name(finish);

        if start_name == finish_name {
            return Err(CityError::SameCity);
        }

        let start = self
            .get(&start_name)
            .ok_or_else(|| CityError::Unknown(start_name.clone()))?;
        let finish = self
            .get(&finish_name)
            .ok_or_else(|| CityError::Unknown(finish_name.clone()))?;

        Ok(TripEndpoints {
            start_name,
            start,
            finish_name,
            finish,
        })
    }
}

/// Resolved endpoints of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripEndpoints {
    pub start_name: String,
    pub start: GeoPoint,
    pub finish_name: String,
    pub finish: GeoPoint,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CITIES: &str = r#"[
        {"city": "Gila Bend", "latitude": 32.9478, "longitude": -112.7168},
        {"city": "Phoenix", "latitude": 33.4484, "longitude": -112.0740},
        {"city": "Nowhere", "latitude": 123.0, "longitude": 0.0}
    ]"#;

    fn directory() -> CityDirectory {
        CityDirectory::from_json(CITIES).unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dir = directory();

        assert_eq!(dir.len(), 2);
        assert!(dir.get("gila bend").is_some());
        assert!(dir.get("PHOENIX").is_some());
        assert!(dir.get("Nowhere").is_none());
    }

    #[test]
    fn resolves_trip() {
        let trip = directory().resolve_trip("gila-bend", "phoenix").unwrap();

        assert_eq!(trip.start_name, "Gila Bend");
        assert_eq!(trip.finish_name, "Phoenix");
        assert_eq!(trip.start, GeoPoint::new(32.9478, -112.7168).unwrap());
    }

    #[test]
    fn rejects_bad_requests() {
        let dir = directory();

        assert_eq!(
            dir.resolve_trip("Gila-Bend", "phoenix"),
            Err(CityError::InvalidFormat("Gila-Bend".into()))
        );
        assert_eq!(
            dir.resolve_trip("phoenix", "phoenix"),
            Err(CityError::SameCity)
        );
        assert_eq!(
            dir.resolve_trip("phoenix", "atlantis"),
            Err(CityError::Unknown("Atlantis".into()))
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cities.json");
        std::fs::write(&path, CITIES).unwrap();

        assert_eq!(CityDirectory::load(&path).unwrap().len(), 2);
        assert!(matches!(
            CityDirectory::load(dir.path().join("missing.json")),
            Err(DirectoryError::Io { .. })
        ));
    }
}
