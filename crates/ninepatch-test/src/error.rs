//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Marker range does not fit the interior
    #[error("marker {start}+{len} does not fit interior extent {extent}")]
    MarkerOutOfRange { start: u32, len: u32, extent: u32 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
