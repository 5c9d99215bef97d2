//! ninepatch-render - Nine-patch parsing and rendering
//!
//! This crate provides:
//!
//! - Border inspection: stretch and pad rectangles from the marker runs on
//!   the 1-pixel border of a source image
//! - 3x3 patch slicing of the border-free interior
//! - Stretch rendering at any size, per axis either by duplicating pixels
//!   (remainder spread around the patch center) or by tiling
//! - A per-size render cache owned by each [`NinePatch`]
//!
//! # Example
//!
//! ```
//! use ninepatch_core::Pix;
//! use ninepatch_render::{StretchOptions, build_nine_patch};
//!
//! // no border markers: a rigid image with no padding on the left/top
//! let source = Pix::new(6, 6).unwrap();
//! let mut patch = build_nine_patch(&source, StretchOptions::tiled()).unwrap();
//! let out = patch.render(12, 8).unwrap();
//! assert_eq!((out.width(), out.height()), (12, 8));
//! ```

pub mod cache;
mod error;
pub mod nine_patch;
pub mod options;
pub mod patches;
pub mod render;
pub mod scan;
pub mod stretch;

pub use cache::{CacheStats, RenderCache, RenderKey};
pub use error::{NinePatchError, NinePatchResult};
pub use nine_patch::{NinePatch, build_nine_patch};
pub use options::{AxisMode, StretchOptions};
pub use patches::{PatchGrid, PatchIndex};
pub use render::{render, render_into};
pub use scan::{BorderMarkers, find_marker_run, inspect_border};
pub use stretch::{Span, multiplicities};
