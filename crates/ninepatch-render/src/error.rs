//! Error types for ninepatch-render

use ninepatch_core::Box;
use thiserror::Error;

/// Errors that can occur while building or drawing a nine-patch
#[derive(Debug, Error)]
pub enum NinePatchError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),

    /// A rectangle derived from the border markers falls outside the
    /// interior image
    #[error("malformed {region} geometry: {rect:?} outside {width}x{height} interior")]
    MalformedGeometry {
        region: &'static str,
        rect: Box,
        width: u32,
        height: u32,
    },

    /// Destination rectangle with negative size
    #[error("invalid destination: {0}")]
    InvalidDestination(String),
}

/// Result type for nine-patch operations
pub type NinePatchResult<T> = Result<T, NinePatchError>;
