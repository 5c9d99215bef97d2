//! Border removal
//!
//! Nine-patch sources carry a 1-pixel marker border that must be stripped
//! before the image content can be sliced.

use super::Pix;
use crate::error::Result;

impl Pix {
    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`,
    /// saturating at 0 when the border consumes the whole axis.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - left - right, height - top - bot)`,
    /// saturating at 0 on either axis.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width().saturating_sub(left.saturating_add(right));
        let h = self.height().saturating_sub(top.saturating_add(bot));
        if w == 0 || h == 0 {
            return Pix::new(w, h);
        }
        self.clip_rectangle(left, top, w, h)
    }
}
