//! Custom error types for `GeoProbe` operations.
//!
//! This module provides structured error handling using `thiserror`. Only the
//! mandatory raster library can produce errors; the optional module probe
//! reports its outcome as a value instead.

use thiserror::Error;

/// Main error type for `GeoProbe` operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The mandatory raster library cannot be loaded at all.
    #[error("{library} is not available: {reason}")]
    LibraryUnavailable {
        /// Name of the missing library (e.g., "GDAL")
        library: String,
        /// Why the library could not be used
        reason: String,
    },

    /// The library is present but a metadata query failed.
    #[error("Failed to query {query}: {message}")]
    Query {
        /// The query that failed (e.g., "driver count")
        query: String,
        /// Description of the failure reported by the library
        message: String,
    },

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using `ProbeError`.
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Get a user-friendly error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LibraryUnavailable { library, .. } => {
                format!("{library} could not be loaded, so the environment cannot be inspected.")
            },
            Self::Query { query, message } => {
                format!("{query} could not be determined: {message}")
            },
            Self::Io(e) => format!("Error: {e}"),
        }
    }

    /// Get recovery suggestions if available.
    ///
    /// Returns helpful suggestions on how to fix or work around the error.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::LibraryUnavailable { .. } => Some(
                "Install GDAL and rebuild geoprobe with the 'gdal' feature enabled.".to_string(),
            ),
            Self::Query { .. } => {
                Some("Check that the GDAL installation is complete and not corrupted.".to_string())
            },
            Self::Io(_) => None,
        }
    }
}

/// Helper to create `ProbeError::Query` from any displayable library error.
#[must_use]
pub fn query_failed(query: &str, err: impl std::fmt::Display) -> ProbeError {
    ProbeError::Query {
        query: query.to_string(),
        message: err.to_string(),
    }
}
