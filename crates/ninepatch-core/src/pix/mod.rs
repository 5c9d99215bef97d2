//! PIX - The ARGB pixel buffer
//!
//! The `Pix` structure is the image type every other part of the
//! workspace reads and writes.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, `0xAARRGGBB`
//! - Rows are stored top to bottom with no padding between them
//! - Zero width and/or zero height are legal and hold no pixels
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod border;
mod clip;
pub mod rop;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// ARGB pixels, row major
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(PixData {
            width,
            height,
            data: vec![0u32; len],
        })
    }
}

/// Number of pixels in a `width` x `height` buffer.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Identity of a shared pixel allocation.
///
/// Two `Pix` values have the same id exactly when one is a `clone()` of
/// the other. The id stays unique for as long as any of those clones is
/// alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixId(usize);

/// PIX - ARGB image container
///
/// `Pix` is immutable and uses reference counting via `Arc` for
/// efficient cloning.
///
/// # Examples
///
/// ```
/// use ninepatch_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to transparent black. Either
    /// dimension may be 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count does not fit
    /// in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height)?),
        })
    }

    /// Create a PIX from row-major ARGB pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_argb(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the identity of the shared allocation.
    #[inline]
    pub fn id(&self) -> PixId {
        PixId(Arc::as_ptr(&self.inner) as usize)
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check whether any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.inner
            .data
            .iter()
            .any(|&p| !crate::color::is_opaque(p))
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy with its own [`PixId`].
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new zero-filled mutable buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count does not fit
    /// in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the pixels of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }

    /// Clear all pixels to transparent black.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_creation() {
        let pix = Pix::new(100, 200).unwrap();
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.data().len(), 20_000);
        assert!(pix.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_pix_creation_zero_sized() {
        let pix = Pix::new(0, 0).unwrap();
        assert!(pix.is_empty());
        assert!(pix.data().is_empty());

        let pix = Pix::new(5, 0).unwrap();
        assert!(pix.is_empty());
        assert_eq!(pix.width(), 5);
    }

    #[test]
    fn test_from_argb_length_checked() {
        assert!(Pix::from_argb(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            Pix::from_argb(2, 2, vec![0; 3]),
            Err(Error::DataLengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_pix_clone_shares_data() {
        let pix1 = Pix::new(10, 10).unwrap();
        let pix2 = pix1.clone();

        assert_eq!(pix1.ref_count(), 2);
        assert_eq!(pix1.id(), pix2.id());
        assert_eq!(pix1.data().as_ptr(), pix2.data().as_ptr());
    }

    #[test]
    fn test_pix_deep_clone() {
        let pix1 = Pix::new(10, 10).unwrap();
        let pix2 = pix1.deep_clone();

        assert_eq!(pix1.ref_count(), 1);
        assert_eq!(pix2.ref_count(), 1);
        assert_ne!(pix1.id(), pix2.id());
    }

    #[test]
    fn test_pix_mut_roundtrip() {
        let pix = Pix::new(4, 3).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.fill(0xFF12_3456);
        pm.row_data_mut(1)[2] = 0xFF00_0000;
        let pix: Pix = pm.into();
        assert_eq!(pix.row_data(0), &[0xFF12_3456; 4]);
        assert_eq!(pix.row_data(1)[2], 0xFF00_0000);
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let pix = Pix::new(4, 4).unwrap();
        let _other = pix.clone();
        assert!(pix.try_into_mut().is_err());
    }

    #[test]
    fn test_has_alpha() {
        let mut pm = PixMut::new(3, 3).unwrap();
        pm.fill(0xFFFF_FFFF);
        let pix: Pix = pm.into();
        assert!(!pix.has_alpha());

        let mut pm = pix.to_mut();
        pm.row_data_mut(2)[2] = 0x80FF_FFFF;
        let pix: Pix = pm.into();
        assert!(pix.has_alpha());
    }
}
