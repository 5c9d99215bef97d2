//! Border inspection
//!
//! The 1-pixel border of a nine-patch source carries four marker runs of
//! opaque black:
//!
//! ```text
//!   top row      -> horizontal stretch run
//!   left column  -> vertical stretch run
//!   bottom row   -> horizontal padding run
//!   right column -> vertical padding run
//! ```
//!
//! Each edge is scanned independently for its first run. The resulting
//! rectangles are expressed relative to the interior (border removed).

use ninepatch_core::color::is_marker;
use ninepatch_core::{Box, Pix};

/// Stretch and pad rectangles, relative to the interior image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderMarkers {
    /// Region that grows when rendered larger than the source
    pub stretch: Box,
    /// Region that defines the content padding
    pub pad: Box,
}

/// Find the first marker run of a border line.
///
/// Returns `(start, len)` in line coordinates. A run that is never
/// followed by an unmarked pixel extends to the end of the line.
pub fn find_marker_run(line: &[u32]) -> Option<(usize, usize)> {
    let start = line.iter().position(|&p| is_marker(p))?;
    let len = line[start..]
        .iter()
        .position(|&p| !is_marker(p))
        .unwrap_or(line.len() - start);
    Some((start, len))
}

/// Convert a border run to an interior-relative `(offset, len)`.
///
/// An edge without a run has no stretch or padding on that axis, which is
/// expressed as `(0, 0)`.
fn interior_axis(run: Option<(usize, usize)>, edge: &str) -> (i32, i32) {
    match run {
        Some((start, len)) => (start as i32 - 1, len as i32),
        None => {
            log::debug!("no marker run on {edge} edge");
            (0, 0)
        }
    }
}

/// Scan the four border edges of a nine-patch source.
///
/// Never fails: missing or malformed runs degrade to zero-length axes or
/// to rectangles that the slicing step later rejects.
pub fn inspect_border(source: &Pix) -> BorderMarkers {
    let w = source.width();
    let h = source.height();

    let top = source.row_argb(0).unwrap_or_default();
    let bottom = source.row_argb(h.saturating_sub(1)).unwrap_or_default();
    let left = source.column_argb(0).unwrap_or_default();
    let right = source.column_argb(w.saturating_sub(1)).unwrap_or_default();

    let (sx, sw) = interior_axis(find_marker_run(&top), "top");
    let (sy, sh) = interior_axis(find_marker_run(&left), "left");
    let (px, pw) = interior_axis(find_marker_run(&bottom), "bottom");
    let (py, ph) = interior_axis(find_marker_run(&right), "right");

    BorderMarkers {
        stretch: Box::new_unchecked(sx, sy, sw, sh),
        pad: Box::new_unchecked(px, py, pw, ph),
    }
}
