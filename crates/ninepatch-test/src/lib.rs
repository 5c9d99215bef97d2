//! ninepatch-test - Regression test framework for the ninepatch workspace
//!
//! This crate provides:
//!
//! - [`RegParams`]: a tracker that records every comparison in a
//!   regression test and reports all failures at the end instead of
//!   stopping at the first one
//! - [`fixtures`]: builders for bordered nine-patch sources whose interior
//!   pixels encode their own coordinates
//! - [`init_logging`]: installs `env_logger` for test binaries
//!
//! # Usage
//!
//! ```ignore
//! use ninepatch_test::RegParams;
//!
//! let mut rp = RegParams::new("render");
//! rp.compare_values(10.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter for the library under test (e.g. `debug`)

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{NinePatchSpec, decode_interior_pixel, interior_pixel};
pub use params::RegParams;

/// Install `env_logger` for the current test binary.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
