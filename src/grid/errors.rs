//! Error types for grid generation

use std::io;
use thiserror::Error;

/// Everything that can stop a grid generation run
#[derive(Debug, Error)]
pub enum GridError {
    /// The input holds no geometry, or no vertices
    #[error("Empty input: {0}")]
    EmptyInput(String),
    /// A CRS identifier could not be resolved against the EPSG database
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),
    /// No usable operation path between two CRSs
    #[error("Unsupported transformation from {source_crs} to {target_crs}: {reason}")]
    TransformationUnsupported {
        source_crs: String,
        target_crs: String,
        reason: String,
    },
    /// Grid spacing must be a positive integer
    #[error("Invalid grid spacing: {0} (must be greater than zero)")]
    InvalidSpacing(i64),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed input geometry or extent
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;
