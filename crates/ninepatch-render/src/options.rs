//! Stretch options
//!
//! Each stretch axis is filled either by duplicating individual source
//! columns/rows, or by repeating the whole stretch patch in chunks
//! ("tiling").

/// How one stretch axis is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisMode {
    /// Duplicate individual pixels, spreading the remainder around the
    /// center of the patch
    #[default]
    Duplicate,
    /// Repeat the whole patch, clipping the final repetition
    Tile,
}

/// Options for building a nine-patch
///
/// # Examples
///
/// ```
/// use ninepatch_render::{AxisMode, StretchOptions};
///
/// let opts = StretchOptions::default().tile_horizontal(true);
/// assert_eq!(opts.horizontal(), AxisMode::Tile);
/// assert_eq!(opts.vertical(), AxisMode::Duplicate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StretchOptions {
    /// Tile the horizontal stretch axis instead of duplicating columns
    pub tile_horizontal: bool,
    /// Tile the vertical stretch axis instead of duplicating rows
    pub tile_vertical: bool,
}

impl StretchOptions {
    /// Options that tile both axes
    pub fn tiled() -> Self {
        Self {
            tile_horizontal: true,
            tile_vertical: true,
        }
    }

    /// Set whether the horizontal axis is tiled
    pub fn tile_horizontal(mut self, tile: bool) -> Self {
        self.tile_horizontal = tile;
        self
    }

    /// Set whether the vertical axis is tiled
    pub fn tile_vertical(mut self, tile: bool) -> Self {
        self.tile_vertical = tile;
        self
    }

    /// Mode of the horizontal stretch axis
    pub fn horizontal(&self) -> AxisMode {
        if self.tile_horizontal {
            AxisMode::Tile
        } else {
            AxisMode::Duplicate
        }
    }

    /// Mode of the vertical stretch axis
    pub fn vertical(&self) -> AxisMode {
        if self.tile_vertical {
            AxisMode::Tile
        } else {
            AxisMode::Duplicate
        }
    }
}
