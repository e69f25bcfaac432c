//! Error types for geometry construction, closing operations and I/O

use std::path::PathBuf;

/// Main error type for all territory operations
///
/// A rejected closing attempt is not an error: it is reported as `Ok(None)`
/// by the closing entry points.
#[derive(Debug, thiserror::Error)]
pub enum TerritoryError {
    /// A continuous position does not sit exactly on a grid cell
    #[error("Position ({x}, {y}, {z}) is not aligned to a grid cell")]
    MisalignedCell {
        /// Supplied x component
        x: f64,
        /// Supplied elevation component
        y: f64,
        /// Supplied z component
        z: f64,
    },

    /// Positional access beyond the end of a path
    #[error("Index {index} is out of range for a path of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the path
        len: usize,
    },

    /// An invariant that the preconditions should have guaranteed was violated
    #[error("Internal inconsistency in {operation}: {reason}")]
    InternalInconsistency {
        /// Operation that detected the fault
        operation: &'static str,
        /// Description of the violated invariant
        reason: String,
    },

    /// Region growth accepted more cells than the configured ceiling
    ///
    /// Usually means the occupancy predicate has no bounded perimeter
    /// around the seed.
    #[error("Region growth exceeded the limit of {limit} cells")]
    GrowthLimitExceeded {
        /// Configured ceiling
        limit: usize,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an occupancy map image
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered claim image
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience type alias for territory results
pub type Result<T> = std::result::Result<T, TerritoryError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TerritoryError {
    TerritoryError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an internal inconsistency error
pub fn internal_inconsistency(operation: &'static str, reason: &impl ToString) -> TerritoryError {
    TerritoryError::InternalInconsistency {
        operation,
        reason: reason.to_string(),
    }
}
