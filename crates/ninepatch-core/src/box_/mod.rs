//! Box, Edges - Rectangle regions and per-side insets
//!
//! `Box` describes stretch, pad and destination rectangles in pixel
//! coordinates. `Edges` describes content padding.

mod adjust;

use crate::error::{Error, Result};

/// A rectangle region
///
/// A simple `Copy` type since it's small and frequently copied. Fields are
/// signed so that malformed geometry (negative origins) can be represented
/// and rejected where it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box at the origin with the given size
    pub fn from_size(w: u32, h: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: w as i32,
            h: h as i32,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check if the box is valid (non-negative dimensions)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w >= 0 && self.h >= 0
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &Box) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Clip the box to fit within bounds
    pub fn clip(&self, width: i32, height: i32) -> Option<Box> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);

        if x < right && y < bottom {
            Some(Box {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}

/// Per-side insets, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Edges {
    /// Create edges from the four sides.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Total horizontal inset (`left + right`)
    #[inline]
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical inset (`top + bottom`)
    #[inline]
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Check whether all four insets are zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Edges::default()
    }
}
