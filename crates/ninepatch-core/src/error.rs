//! Error types for ninepatch-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Ninepatch core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer dimensions that cannot be allocated
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Rectangle not fully contained in a buffer
    #[error("region {w}x{h} at ({x}, {y}) falls outside {width}x{height} image")]
    RegionOutOfBounds {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        width: u32,
        height: u32,
    },

    /// Pixel data length does not match the declared dimensions
    #[error("dimension mismatch: expected {expected} pixels, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
