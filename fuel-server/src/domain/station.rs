//! Fuel station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::location::GeoPoint;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque, non-empty fuel station identifier (e.g. an OPIS truckstop id).
///
/// Surrounding whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::StationId;
///
/// let id = StationId::parse(" 7 ").unwrap();
/// assert_eq!(id.as_str(), "7");
///
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "station id cannot be empty",
            });
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationId::parse(&s)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fuel station from the catalog snapshot.
///
/// Immutable for the duration of a planning call. The price is guaranteed
/// positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStation {
    id: StationId,
    address: Option<String>,
    price_per_gallon: f64,
    location: GeoPoint,
}

impl FuelStation {
    /// Create a station, validating the price.
    ///
    /// A blank address is stored as `None`.
    pub fn new(
        id: StationId,
        address: Option<String>,
        price_per_gallon: f64,
        location: GeoPoint,
    ) -> Result<Self, DomainError> {
        if !price_per_gallon.is_finite() || price_per_gallon <= 0.0 {
            return Err(DomainError::InvalidStation(
                "price per gallon must be positive and finite",
            ));
        }

        let address = address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(Self {
            id,
            address,
            price_per_gallon,
            location,
        })
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn price_per_gallon(&self) -> f64 {
        self.price_per_gallon
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any id with a non-blank core parses to its trimmed form
        #[test]
        fn trimmed_roundtrip(core in "[A-Za-z0-9-]{1,12}", pad in " {0,3}") {
            let raw = format!("{pad}{core}{pad}");
            let id = StationId::parse(&raw).unwrap();
            prop_assert_eq!(id.as_str(), core.as_str());
        }

        /// Whitespace-only ids are always rejected
        #[test]
        fn blank_rejected(s in "[ \t]{0,6}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
