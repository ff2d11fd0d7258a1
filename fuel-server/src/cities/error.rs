//! City resolution error types.

use std::path::PathBuf;

/// Errors resolving the cities of a trip request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CityError {
    /// City slug is not lowercase-with-hyphens
    #[error(
        "Invalid city name format. Use lowercase with hyphens between words (e.g., gila-bend)."
    )]
    InvalidFormat(String),

    /// Start and finish resolve to the same city
    #[error("The starting city and the destination city cannot be the same.")]
    SameCity,

    /// City is not in the directory
    #[error("Only cities within the United States are available.")]
    Unknown(String),
}

/// Errors loading the city directory file.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Directory file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory file is not a JSON array of city records
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
