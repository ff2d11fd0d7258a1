//! Fuel station catalog.
//!
//! The planner reads stations through the [`StationCatalog`] trait. The
//! service serves them from an in-memory snapshot loaded from a JSON file at
//! startup.

mod catalog;
mod error;
mod snapshot;

pub use catalog::{InMemoryCatalog, ROUTE_REGION_PADDING_DEG, StationCatalog};
pub use error::StationError;
pub use snapshot::{StationRecord, load_snapshot, parse_snapshot};
