//! Ninepatch Core - Basic data structures for nine-patch rendering
//!
//! This crate provides the fundamental data structures used throughout
//! the ninepatch workspace:
//!
//! - [`Pix`] / [`PixMut`] - ARGB pixel buffer (immutable / mutable)
//! - [`Box`] - Integer rectangle regions
//! - [`Edges`] - Per-side insets (content padding)
//!
//! Image decoding is out of scope: callers hand in pixels that are
//! already decoded into 32-bit ARGB words.

pub mod box_;
pub mod error;
pub mod pix;

pub use box_::{Box, Edges};
pub use error::{Error, Result};
pub use pix::{Pix, PixId, PixMut};

/// Channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xAARRGGBB` (alpha in the high byte).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Opaque black, the only value that counts as a border marker.
    pub const BLACK: u32 = 0xFF00_0000;

    /// Opaque white.
    pub const WHITE: u32 = 0xFFFF_FFFF;

    /// Fully transparent black; the initial value of new buffers.
    pub const TRANSPARENT: u32 = 0x0000_0000;

    /// Extract alpha component from an ARGB pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from an ARGB pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from an ARGB pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from an ARGB pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque ARGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose an ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract ARGB values from a pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Check whether a border pixel is part of a marker run.
    ///
    /// Only pure opaque black qualifies; near-black or translucent black
    /// pixels are treated as unmarked.
    #[inline]
    pub fn is_marker(pixel: u32) -> bool {
        pixel == BLACK
    }

    /// Check whether a pixel is fully opaque.
    #[inline]
    pub fn is_opaque(pixel: u32) -> bool {
        alpha(pixel) == 0xff
    }

}
