//! 3x3 patch decomposition
//!
//! ```text
//!        +---+---+---+
//!        | 0 | 1 | 2 |
//!        +---+---+---+
//!        | 3 | 4 | 5 |
//!        +---+---+---+
//!        | 6 | 7 | 8 |
//!        +---+---+---+
//! ```
//!
//! The middle column and row are the stretch rectangle; corners never
//! scale, edges scale along one axis and the center along both.

use crate::error::{NinePatchError, NinePatchResult};
use ninepatch_core::{Box, Pix};

/// One cell of the 3x3 grid, in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum PatchIndex {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Left = 3,
    Center = 4,
    Right = 5,
    BottomLeft = 6,
    Bottom = 7,
    BottomRight = 8,
}

impl PatchIndex {
    /// All cells in row-major order
    pub const ALL: [PatchIndex; 9] = [
        PatchIndex::TopLeft,
        PatchIndex::Top,
        PatchIndex::TopRight,
        PatchIndex::Left,
        PatchIndex::Center,
        PatchIndex::Right,
        PatchIndex::BottomLeft,
        PatchIndex::Bottom,
        PatchIndex::BottomRight,
    ];

    /// Column of this cell (0..3)
    #[inline]
    pub fn column(self) -> usize {
        self as usize % 3
    }

    /// Row of this cell (0..3)
    #[inline]
    pub fn row(self) -> usize {
        self as usize / 3
    }

    fn name(self) -> &'static str {
        match self {
            PatchIndex::TopLeft => "top-left patch",
            PatchIndex::Top => "top patch",
            PatchIndex::TopRight => "top-right patch",
            PatchIndex::Left => "left patch",
            PatchIndex::Center => "center patch",
            PatchIndex::Right => "right patch",
            PatchIndex::BottomLeft => "bottom-left patch",
            PatchIndex::Bottom => "bottom patch",
            PatchIndex::BottomRight => "bottom-right patch",
        }
    }
}

/// The nine sub-images of an interior bitmap
///
/// Any patch may be zero-sized when the stretch rectangle touches an edge
/// of the interior or has zero length.
#[derive(Debug, Clone)]
pub struct PatchGrid {
    patches: [Pix; 9],
    /// Widths of the left, middle and right columns
    cols: [u32; 3],
    /// Heights of the top, middle and bottom rows
    rows: [u32; 3],
}

impl PatchGrid {
    /// Slice `interior` into nine patches along `stretch`.
    ///
    /// # Errors
    ///
    /// Returns [`NinePatchError::MalformedGeometry`] if any patch would
    /// read outside the interior.
    pub fn slice(interior: &Pix, stretch: &Box) -> NinePatchResult<Self> {
        let iw = interior.width() as i32;
        let ih = interior.height() as i32;

        let col_x = [0, stretch.x, stretch.x + stretch.w];
        let col_w = [stretch.x, stretch.w, iw - stretch.x - stretch.w];
        let row_y = [0, stretch.y, stretch.y + stretch.h];
        let row_h = [stretch.y, stretch.h, ih - stretch.y - stretch.h];

        let mut patches: Vec<Pix> = Vec::with_capacity(9);
        for index in PatchIndex::ALL {
            let (c, r) = (index.column(), index.row());
            let rect = Box::new_unchecked(col_x[c], row_y[r], col_w[c], row_h[r]);
            let patch = interior
                .clip_box(&rect)
                .map_err(|_| NinePatchError::MalformedGeometry {
                    region: index.name(),
                    rect,
                    width: interior.width(),
                    height: interior.height(),
                })?;
            patches.push(patch);
        }

        let patches: [Pix; 9] = patches.try_into().map_err(|v: Vec<Pix>| {
            ninepatch_core::Error::IndexOutOfBounds {
                index: v.len(),
                len: 9,
            }
        })?;

        // Every rect passed the bounds check, so all sizes are non-negative.
        Ok(Self {
            patches,
            cols: col_w.map(|w| w as u32),
            rows: row_h.map(|h| h as u32),
        })
    }

    /// Get one patch
    #[inline]
    pub fn get(&self, index: PatchIndex) -> &Pix {
        &self.patches[index as usize]
    }

    /// Widths of the left, middle and right columns
    #[inline]
    pub fn columns(&self) -> [u32; 3] {
        self.cols
    }

    /// Heights of the top, middle and bottom rows
    #[inline]
    pub fn rows(&self) -> [u32; 3] {
        self.rows
    }

    /// Iterate over `(index, patch)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (PatchIndex, &Pix)> {
        PatchIndex::ALL.into_iter().zip(self.patches.iter())
    }
}
