//! Station catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading a station snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Snapshot file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not a JSON array of station records
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Snapshot held no usable station
    #[error("no valid stations in snapshot")]
    Empty,
}
