//! ninepatch - Nine-patch images for Rust
//!
//! A nine-patch is a bitmap with a 1-pixel border whose opaque black runs
//! mark which interior columns and rows may stretch (top and left edges)
//! and where content goes (bottom and right edges). Rendering at a new
//! size keeps the corners intact and spreads the extra space over the
//! marked regions only.
//!
//! # Example
//!
//! ```
//! use ninepatch::{NinePatch, Pix, StretchOptions};
//! use ninepatch::color::{BLACK, WHITE};
//!
//! // 3x3 interior with the middle pixel marked as stretchable
//! let (w, b) = (WHITE, BLACK);
//! let source = Pix::from_argb(5, 5, vec![
//!     w, w, b, w, w,
//!     w, 1, 2, 3, w,
//!     b, 4, 5, 6, w,
//!     w, 7, 8, 9, w,
//!     w, w, w, w, w,
//! ]).unwrap();
//!
//! let mut patch = NinePatch::new(&source, StretchOptions::default()).unwrap();
//! let out = patch.render(10, 10).unwrap();
//! assert_eq!(out.get_pixel(0, 0), Some(1));
//! assert_eq!(out.get_pixel(5, 5), Some(5));
//! assert_eq!(out.get_pixel(9, 9), Some(9));
//! ```

// Re-export core types (pixel buffers and geometry)
pub use ninepatch_core::*;

// Re-export the engine
pub use ninepatch_render::{
    AxisMode, CacheStats, NinePatch, NinePatchError, NinePatchResult, PatchIndex,
    StretchOptions, build_nine_patch,
};

// Lower-level building blocks, as a module
pub use ninepatch_render as render;
