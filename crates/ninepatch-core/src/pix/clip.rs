//! Rectangle extraction
//!
//! Functions for copying rectangular sub-regions out of an image. Unlike a
//! general-purpose crop, extraction here is exact: a rectangle that is not
//! fully inside the source is an error, never silently clamped.

use super::Pix;
use crate::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// Zero-sized rectangles are legal and produce a zero-sized image, as
    /// long as their origin lies within `0..=width` / `0..=height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the rectangle extends beyond
    /// the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninepatch_core::Pix;
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(10, 20, 50, 40).unwrap();
    /// assert_eq!(clipped.width(), 50);
    /// assert_eq!(clipped.height(), 40);
    ///
    /// assert!(pix.clip_rectangle(80, 60, 50, 50).is_err());
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        self.check_region(x as i64, y as i64, w as i64, h as i64)?;

        let mut data = Vec::with_capacity(w as usize * h as usize);
        for row in y..y + h {
            let line = self.row_data(row);
            data.extend_from_slice(&line[x as usize..(x + w) as usize]);
        }
        Pix::from_argb(w, h, data)
    }

    /// Extract the region described by a (possibly malformed) box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the box has a negative
    /// origin or size, or extends beyond the image.
    pub fn clip_box(&self, region: &Box) -> Result<Pix> {
        self.check_region(
            region.x as i64,
            region.y as i64,
            region.w as i64,
            region.h as i64,
        )?;
        self.clip_rectangle(
            region.x as u32,
            region.y as u32,
            region.w as u32,
            region.h as u32,
        )
    }

    /// Check that a rectangle lies fully inside the image.
    fn check_region(&self, x: i64, y: i64, w: i64, h: i64) -> Result<()> {
        let width = self.width();
        let height = self.height();
        if x < 0 || y < 0 || w < 0 || h < 0 || x + w > width as i64 || y + h > height as i64 {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                w,
                h,
                width,
                height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> Pix {
        Pix::from_argb(w, h, (0..w * h).collect()).unwrap()
    }

    #[test]
    fn test_clip_rectangle_copies_region() {
        let pix = numbered(4, 4);
        let sub = pix.clip_rectangle(1, 2, 2, 2).unwrap();
        assert_eq!(sub.data(), &[9, 10, 13, 14]);
    }

    #[test]
    fn test_clip_rectangle_zero_sized() {
        let pix = numbered(4, 4);
        let sub = pix.clip_rectangle(4, 0, 0, 4).unwrap();
        assert_eq!((sub.width(), sub.height()), (0, 4));
        assert!(sub.data().is_empty());
    }

    #[test]
    fn test_clip_rectangle_out_of_bounds() {
        let pix = numbered(4, 4);
        assert!(matches!(
            pix.clip_rectangle(3, 0, 2, 1),
            Err(Error::RegionOutOfBounds { x: 3, w: 2, .. })
        ));
        assert!(pix.clip_rectangle(5, 0, 0, 0).is_err());
    }

    #[test]
    fn test_clip_box_rejects_negative() {
        let pix = numbered(4, 4);
        let b = Box::new_unchecked(-1, 0, 2, 2);
        assert!(matches!(
            pix.clip_box(&b),
            Err(Error::RegionOutOfBounds { x: -1, .. })
        ));
        let b = Box::new_unchecked(0, 0, 2, -1);
        assert!(pix.clip_box(&b).is_err());
    }

    #[test]
    fn test_clip_box_ok() {
        let pix = numbered(4, 4);
        let sub = pix.clip_box(&Box::new_unchecked(2, 0, 2, 1)).unwrap();
        assert_eq!(sub.data(), &[2, 3]);
    }
}
