//! Nine-patch source fixtures
//!
//! [`NinePatchSpec`] describes the interior size and the four marker runs
//! of a source image in interior coordinates; [`NinePatchSpec::build`]
//! turns it into a bordered ARGB image. Every interior pixel encodes its
//! own `(x, y)` so tests can tell which source pixel landed where.

use crate::error::{TestError, TestResult};
use ninepatch_core::color::{BLACK, WHITE};
use ninepatch_core::{Pix, PixMut};

/// Flag bit that keeps encoded interior pixels away from marker black.
const INTERIOR_FLAG: u32 = 0xFF80_0000;

/// Encode interior coordinates as an opaque pixel.
///
/// `x` must be below 2048 and `y` below 4096.
pub fn interior_pixel(x: u32, y: u32) -> u32 {
    INTERIOR_FLAG | ((x & 0x7FF) << 12) | (y & 0xFFF)
}

/// Recover the interior coordinates from a pixel made by [`interior_pixel`].
///
/// Returns `None` for pixels that carry no coordinates (e.g. untouched
/// transparent output).
pub fn decode_interior_pixel(pixel: u32) -> Option<(u32, u32)> {
    if pixel & INTERIOR_FLAG != INTERIOR_FLAG {
        return None;
    }
    Some(((pixel >> 12) & 0x7FF, pixel & 0xFFF))
}

/// Description of a nine-patch source image.
///
/// Marker runs are `(start, len)` in interior coordinates; `None` leaves
/// that border edge without any marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NinePatchSpec {
    pub interior_width: u32,
    pub interior_height: u32,
    /// Top edge: horizontal stretch run
    pub stretch_x: Option<(u32, u32)>,
    /// Left edge: vertical stretch run
    pub stretch_y: Option<(u32, u32)>,
    /// Bottom edge: horizontal padding run
    pub pad_x: Option<(u32, u32)>,
    /// Right edge: vertical padding run
    pub pad_y: Option<(u32, u32)>,
}

impl NinePatchSpec {
    /// Interior of the given size with no markers at all.
    pub fn new(interior_width: u32, interior_height: u32) -> Self {
        Self {
            interior_width,
            interior_height,
            ..Default::default()
        }
    }

    /// Set both stretch runs.
    pub fn stretch(mut self, x: (u32, u32), y: (u32, u32)) -> Self {
        self.stretch_x = Some(x);
        self.stretch_y = Some(y);
        self
    }

    /// Set both padding runs.
    pub fn pad(mut self, x: (u32, u32), y: (u32, u32)) -> Self {
        self.pad_x = Some(x);
        self.pad_y = Some(y);
        self
    }

    /// Build the bordered source image.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::MarkerOutOfRange`] if a run does not fit the
    /// interior.
    pub fn build(&self) -> TestResult<Pix> {
        Ok(self.build_mut()?.into())
    }

    /// Build the bordered source image as a mutable buffer, so tests can
    /// tamper with the border afterwards.
    pub fn build_mut(&self) -> TestResult<PixMut> {
        let (iw, ih) = (self.interior_width, self.interior_height);
        let (w, h) = (iw + 2, ih + 2);
        let mut pm = PixMut::new(w, h)?;
        pm.fill(WHITE);

        for y in 0..ih {
            for x in 0..iw {
                pm.set_pixel(x + 1, y + 1, interior_pixel(x, y))?;
            }
        }

        if let Some(run) = self.stretch_x {
            for i in marker_range(run, iw)? {
                pm.set_pixel(i + 1, 0, BLACK)?;
            }
        }
        if let Some(run) = self.pad_x {
            for i in marker_range(run, iw)? {
                pm.set_pixel(i + 1, h - 1, BLACK)?;
            }
        }
        if let Some(run) = self.stretch_y {
            for i in marker_range(run, ih)? {
                pm.set_pixel(0, i + 1, BLACK)?;
            }
        }
        if let Some(run) = self.pad_y {
            for i in marker_range(run, ih)? {
                pm.set_pixel(w - 1, i + 1, BLACK)?;
            }
        }

        log::trace!("built {w}x{h} fixture: {self:?}");
        Ok(pm)
    }
}

fn marker_range((start, len): (u32, u32), extent: u32) -> TestResult<std::ops::Range<u32>> {
    if start + len > extent {
        return Err(TestError::MarkerOutOfRange { start, len, extent });
    }
    Ok(start..start + len)
}
