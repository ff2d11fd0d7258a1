//! City resolution for trip requests.

mod directory;
mod error;
mod names;

pub use directory::{CityDirectory, CityRecord, TripEndpoints};
pub use error::{CityError, DirectoryError};
pub use names::{format_city_name, validate_slug};
