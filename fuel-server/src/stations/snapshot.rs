//! JSON station snapshot loading.
//!
//! A snapshot is a JSON array of station records exported from the fuel
//! price list. Records that fail validation are skipped and logged rather
//! than failing the whole load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{FuelStation, GeoPoint, StationId};

use super::error::StationError;

/// A station record as exported in the snapshot file.
///
/// Columns the planner has no use for (name, city, state) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub opis_truckstop_id: String,

    #[serde(default)]
    pub address: Option<String>,

    pub price_per_gallon: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationRecord {
    /// Convert to a validated station.
    pub fn to_station(&self) -> Result<FuelStation, String> {
        let id = StationId::parse(&self.opis_truckstop_id).map_err(|e| e.to_string())?;
        let location = GeoPoint::new(self.latitude, self.longitude).map_err(|e| e.to_string())?;

        FuelStation::new(id, self.address.clone(), self.price_per_gallon, location)
            .map_err(|e| e.to_string())
    }
}

/// Parse a snapshot from JSON text.
///
/// Invalid records are skipped. Duplicate ids keep the last record.
/// Stations are returned ordered by id.
pub fn parse_snapshot(json: &str) -> Result<Vec<FuelStation>, StationError> {
    let records: Vec<StationRecord> = serde_json::from_str(json).map_err(|e| StationError::Json {
        message: e.to_string(),
    })?;

    let total = records.len();
    let mut by_id = BTreeMap::new();
    let mut skipped = 0;

    for record in &records {
        match record.to_station() {
            Ok(station) => {
                by_id.insert(station.id().clone(), station);
            }
            Err(reason) => {
                skipped += 1;
                warn!(id = %record.opis_truckstop_id, %reason, "skipping invalid station record");
            }
        }
    }

    if by_id.is_empty() {
        return Err(StationError::Empty);
    }

    info!(
        records = total,
        stations = by_id.len(),
        skipped,
        "parsed station snapshot"
    );

    Ok(by_id.into_values().collect())
}

/// Load a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<FuelStation>, StationError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_snapshot(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"[
        {"opis_truckstop_id": "7", "name": "Pilot", "address": "I-40, EXIT 283",
         "city": "Big Cabin", "state": "OK", "price_per_gallon": 3.0, "latitude": 36.5, "longitude": -95.2},
        {"opis_truckstop_id": "3", "address": "", "price_per_gallon": 3.4,
         "latitude": 35.0, "longitude": -97.0},
        {"opis_truckstop_id": "7", "address": "I-40, EXIT 283", "price_per_gallon": 2.9,
         "latitude": 36.5, "longitude": -95.2},
        {"opis_truckstop_id": "bad-price", "price_per_gallon": -1.0, "latitude": 35.0, "longitude": -97.0},
        {"opis_truckstop_id": "bad-lat", "price_per_gallon": 3.0, "latitude": 95.0, "longitude": -97.0},
        {"opis_truckstop_id": "  ", "price_per_gallon": 3.0, "latitude": 35.0, "longitude": -97.0}
    ]"#;

    #[test]
    fn parses_and_skips_invalid() {
        let stations = parse_snapshot(SNAPSHOT).unwrap();

        let ids: Vec<&str> = stations.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["3", "7"]);
        assert_eq!(stations[0].address(), None);
    }

    #[test]
    fn duplicate_id_keeps_last() {
        let stations = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(stations[1].price_per_gallon(), 2.9);
    }

    #[test]
    fn all_invalid_is_empty_error() {
        let json = r#"[{"opis_truckstop_id": "x", "price_per_gallon": 0.0, "latitude": 0.0, "longitude": 0.0}]"#;
        assert!(matches!(parse_snapshot(json), Err(StationError::Empty)));
        assert!(matches!(parse_snapshot("[]"), Err(StationError::Empty)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_snapshot("{\"not\": \"an array\"}"),
            Err(StationError::Json { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        assert_eq!(load_snapshot(&path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let result = load_snapshot(dir.path().join("missing.json"));

        assert!(matches!(result, Err(StationError::Io { .. })));
    }
}
