//! Raster operations (ROP)
//!
//! Block copies between images. Every copy is a straight per-pixel
//! transfer: no blending, the destination pixel is replaced.
//!
//! Copies are clipped against both images, so a block hanging off any
//! edge only transfers its overlapping part.

use super::{Pix, PixMut};

impl PixMut {
    /// Copy a `w` x `h` block from `src` at `(sx, sy)` to `(dx, dy)`.
    ///
    /// The destination origin may be negative. Pixels that would be read
    /// from outside `src` or written outside `self` are skipped.
    ///
    /// # Arguments
    ///
    /// * `dx`, `dy` - Destination origin
    /// * `w`, `h` - Block size
    /// * `src` - Source image
    /// * `sx`, `sy` - Source origin
    #[allow(clippy::too_many_arguments)]
    pub fn rasterop(&mut self, dx: i32, dy: i32, w: u32, h: u32, src: &Pix, sx: u32, sy: u32) {
        let Some((cols, rows)) = clip_block(
            (dx as i64, dy as i64),
            (w as i64, h as i64),
            (sx as i64, sy as i64),
            (self.width(), self.height()),
            (src.width(), src.height()),
        ) else {
            return;
        };

        for r in 0..rows.len {
            let src_row = src.row_data((rows.src + r) as u32);
            let src_span = &src_row[cols.src as usize..(cols.src + cols.len) as usize];
            let dst_row = self.row_data_mut((rows.dst + r) as u32);
            dst_row[cols.dst as usize..(cols.dst + cols.len) as usize].copy_from_slice(src_span);
        }
    }

    /// Copy all of `src` with its upper-left corner at `(dx, dy)`.
    pub fn blit(&mut self, src: &Pix, dx: i32, dy: i32) {
        self.rasterop(dx, dy, src.width(), src.height(), src, 0, 0);
    }
}

/// One axis of a clipped block copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisClip {
    src: i64,
    dst: i64,
    len: i64,
}

/// Clip one axis of a copy against source and destination extents.
fn clip_axis(dst: i64, len: i64, src: i64, dst_extent: u32, src_extent: u32) -> Option<AxisClip> {
    // Shift both origins forward until neither is negative.
    let lead = 0i64.max(-dst).max(-src);
    let (dst, src, len) = (dst + lead, src + lead, len - lead);
    let len = len
        .min(dst_extent as i64 - dst)
        .min(src_extent as i64 - src);
    (len > 0).then_some(AxisClip { src, dst, len })
}

fn clip_block(
    dst: (i64, i64),
    size: (i64, i64),
    src: (i64, i64),
    dst_extent: (u32, u32),
    src_extent: (u32, u32),
) -> Option<(AxisClip, AxisClip)> {
    let cols = clip_axis(dst.0, size.0, src.0, dst_extent.0, src_extent.0)?;
    let rows = clip_axis(dst.1, size.1, src.1, dst_extent.1, src_extent.1)?;
    Some((cols, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> Pix {
        Pix::from_argb(w, h, (1..=w * h).collect()).unwrap()
    }

    #[test]
    fn test_rasterop_inside() {
        let src = numbered(3, 3);
        let mut dst = PixMut::new(4, 4).unwrap();
        dst.rasterop(1, 1, 2, 2, &src, 1, 1);
        assert_eq!(dst.row_data(0), &[0, 0, 0, 0]);
        assert_eq!(dst.row_data(1), &[0, 5, 6, 0]);
        assert_eq!(dst.row_data(2), &[0, 8, 9, 0]);
        assert_eq!(dst.row_data(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_rasterop_clips_destination() {
        let src = numbered(3, 3);
        let mut dst = PixMut::new(2, 2).unwrap();
        dst.rasterop(-1, 1, 3, 3, &src, 0, 0);
        // column 0 of src falls off the left edge, rows past 1 fall off
        assert_eq!(dst.row_data(0), &[0, 0]);
        assert_eq!(dst.row_data(1), &[2, 3]);
    }

    #[test]
    fn test_rasterop_clips_source() {
        let src = numbered(2, 2);
        let mut dst = PixMut::new(3, 3).unwrap();
        dst.rasterop(0, 0, 3, 3, &src, 1, 0);
        assert_eq!(dst.row_data(0), &[2, 0, 0]);
        assert_eq!(dst.row_data(1), &[4, 0, 0]);
    }

    #[test]
    fn test_rasterop_zero_sized_is_noop() {
        let src = numbered(2, 2);
        let mut dst = PixMut::new(2, 2).unwrap();
        dst.rasterop(0, 0, 0, 2, &src, 0, 0);
        assert!(dst.data().iter().all(|&p| p == 0));

        let empty = Pix::new(0, 0).unwrap();
        dst.blit(&empty, 0, 0);
        assert!(dst.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_blit_overwrites() {
        let src = numbered(2, 1);
        let mut dst = PixMut::new(3, 1).unwrap();
        dst.fill(9);
        dst.blit(&src, 1, 0);
        assert_eq!(dst.row_data(0), &[9, 1, 2]);
    }
}
