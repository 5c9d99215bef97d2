//! Stretch distribution
//!
//! Filling `fill` output pixels from a patch that is `thickness` pixels
//! thick along one axis. The result is a list of [`Span`]s, each a block
//! copy along that axis; the compositor crosses the column spans of a
//! patch with its row spans, so one routine covers every combination of
//! duplicated and tiled axes.
//!
//! Duplication gives every source pixel `fill / thickness` copies, and
//! one extra copy to a centered window of `fill % thickness` pixels:
//!
//! ```text
//!   thickness = 7, fill = 17  ->  base 2, remainder 3, gap 4
//!   multiplicity: [2, 2, 3, 3, 3, 2, 2]
//!                        ^^^^^^^ centered window
//! ```
//!
//! When the gap around the window is odd, the trailing side gets the
//! larger half.

use crate::options::AxisMode;

/// One block copy along an axis
///
/// `len` source pixels starting at `src` are written starting at `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub src: u32,
    pub dst: i32,
    pub len: u32,
}

/// Copy counts per source pixel for duplication mode.
///
/// The counts sum to `fill`, differ by at most one, and the larger counts
/// form one contiguous block centered in the patch. A zero-thickness patch
/// has nothing to duplicate and yields an empty array.
pub fn multiplicities(thickness: u32, fill: u32) -> Vec<u32> {
    if thickness == 0 {
        return Vec::new();
    }
    let base = fill / thickness;
    let remainder = fill % thickness;
    let gap = thickness - remainder;
    let lead = gap / 2;
    let extra_end = thickness - (gap - lead);

    (0..thickness)
        .map(|i| {
            if (lead..extra_end).contains(&i) {
                base + 1
            } else {
                base
            }
        })
        .collect()
}

/// Spans that duplicate single pixels according to [`multiplicities`].
pub fn duplicate_spans(thickness: u32, start: i32, fill: u32) -> Vec<Span> {
    let mut spans = Vec::with_capacity(fill as usize);
    let mut dst = start;
    for (src, count) in multiplicities(thickness, fill).into_iter().enumerate() {
        for _ in 0..count {
            spans.push(Span {
                src: src as u32,
                dst,
                len: 1,
            });
            dst += 1;
        }
    }
    spans
}

/// Spans that repeat the whole patch, clipping the last repetition to
/// the remaining fill.
pub fn tile_spans(thickness: u32, start: i32, fill: u32) -> Vec<Span> {
    if thickness == 0 {
        return Vec::new();
    }
    let mut spans = Vec::with_capacity(fill.div_ceil(thickness) as usize);
    let mut done = 0u32;
    while done < fill {
        let len = thickness.min(fill - done);
        spans.push(Span {
            src: 0,
            dst: start + done as i32,
            len,
        });
        done += len;
    }
    spans
}

/// Spans that fill `fill` pixels from `start` using `mode`.
///
/// A non-positive fill produces no spans.
pub fn stretch_spans(mode: AxisMode, thickness: u32, start: i32, fill: i64) -> Vec<Span> {
    if fill <= 0 {
        return Vec::new();
    }
    let fill = fill.min(u32::MAX as i64) as u32;
    match mode {
        AxisMode::Duplicate => duplicate_spans(thickness, start, fill),
        AxisMode::Tile => tile_spans(thickness, start, fill),
    }
}

/// The single span of an unscaled axis.
pub fn fixed_span(thickness: u32, start: i32) -> Vec<Span> {
    vec![Span {
        src: 0,
        dst: start,
        len: thickness,
    }]
}
