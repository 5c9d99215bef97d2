//! The nine-patch facade
//!
//! [`NinePatch`] is built once from a bordered source image and then
//! rendered on demand at any size. Renders are memoized per size.

use crate::cache::{CacheStats, RenderCache, RenderKey};
use crate::error::{NinePatchError, NinePatchResult};
use crate::options::StretchOptions;
use crate::patches::{PatchGrid, PatchIndex};
use crate::render::render;
use crate::scan::{BorderMarkers, inspect_border};
use ninepatch_core::{Box, Edges, Pix, PixMut};

/// A parsed nine-patch image
///
/// # Examples
///
/// ```
/// use ninepatch_core::{Pix, color::{BLACK, WHITE}};
/// use ninepatch_render::{NinePatch, StretchOptions};
///
/// // 3x3 interior, every border edge marks interior pixels 0..3
/// let w = WHITE;
/// let b = BLACK;
/// let source = Pix::from_argb(5, 5, vec![
///     w, b, b, b, w,
///     b, 1, 2, 3, b,
///     b, 4, 5, 6, b,
///     b, 7, 8, 9, b,
///     w, b, b, b, w,
/// ]).unwrap();
///
/// let mut patch = NinePatch::new(&source, StretchOptions::default()).unwrap();
/// assert!(patch.content_padding().is_zero());
///
/// let out = patch.render(10, 10).unwrap();
/// assert_eq!((out.width(), out.height()), (10, 10));
/// ```
#[derive(Debug, Clone)]
pub struct NinePatch {
    source: Pix,
    interior: Pix,
    grid: PatchGrid,
    markers: BorderMarkers,
    padding: Edges,
    options: StretchOptions,
    cache: RenderCache,
}

impl NinePatch {
    /// Parse the border of `source` and slice its interior.
    ///
    /// The source is shared, never copied or modified.
    ///
    /// # Errors
    ///
    /// Returns [`NinePatchError::MalformedGeometry`] if the stretch or pad
    /// rectangle reaches outside the interior.
    pub fn new(source: &Pix, options: StretchOptions) -> NinePatchResult<Self> {
        let markers = inspect_border(source);
        let interior = source.remove_border(1)?;
        let grid = PatchGrid::slice(&interior, &markers.stretch)?;
        let padding = padding_for(&interior, &markers.pad)?;

        log::debug!(
            "built {}x{} nine-patch: stretch {:?}, pad {:?}, {:?}",
            source.width(),
            source.height(),
            markers.stretch,
            markers.pad,
            options
        );

        Ok(Self {
            source: source.clone(),
            interior,
            grid,
            markers,
            padding,
            options,
            cache: RenderCache::new(),
        })
    }

    /// The bordered image this nine-patch was built from
    pub fn source(&self) -> &Pix {
        &self.source
    }

    /// The source with its 1-pixel border removed
    pub fn interior_bitmap(&self) -> &Pix {
        &self.interior
    }

    /// Content insets derived from the pad rectangle
    pub fn content_padding(&self) -> Edges {
        self.padding
    }

    /// Stretch rectangle, relative to the interior
    pub fn stretch_rect(&self) -> Box {
        self.markers.stretch
    }

    /// Pad rectangle, relative to the interior
    pub fn pad_rect(&self) -> Box {
        self.markers.pad
    }

    pub fn options(&self) -> StretchOptions {
        self.options
    }

    /// One of the nine sub-images
    pub fn patch(&self, index: PatchIndex) -> &Pix {
        self.grid.get(index)
    }

    pub fn patches(&self) -> &PatchGrid {
        &self.grid
    }

    /// Check whether any interior pixel is not fully opaque.
    pub fn is_transparent(&self) -> bool {
        self.interior.has_alpha()
    }

    /// Smallest size at which no corner is clipped: the fixed columns and
    /// rows added together.
    pub fn min_size(&self) -> (u32, u32) {
        let [c0, _, c2] = self.grid.columns();
        let [r0, _, r2] = self.grid.rows();
        (c0 + c2, r0 + r2)
    }

    /// Region left for content when this nine-patch fills `bounds`.
    pub fn content_rect(&self, bounds: &Box) -> Box {
        bounds.inset(&self.padding)
    }

    /// Size needed to hold content of `content_width` x `content_height`
    /// inside the padding.
    pub fn outer_size(&self, content_width: u32, content_height: u32) -> (u32, u32) {
        (
            content_width.saturating_add(self.padding.horizontal()),
            content_height.saturating_add(self.padding.vertical()),
        )
    }

    /// Render at exactly `width` x `height`.
    ///
    /// Repeated calls with the same size return the cached image, sharing
    /// its pixels.
    pub fn render(&mut self, width: u32, height: u32) -> NinePatchResult<Pix> {
        let key = RenderKey::new(&self.source, width, height);
        let grid = &self.grid;
        let options = &self.options;
        self.cache
            .get_or_render(key, || render(grid, options, width, height))
    }

    /// Render without consulting or filling the cache.
    pub fn render_uncached(&self, width: u32, height: u32) -> NinePatchResult<Pix> {
        render(&self.grid, &self.options, width, height)
    }

    /// Render at the size of `dest` and copy the result to its origin in
    /// `target`. Parts falling outside `target` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`NinePatchError::InvalidDestination`] if `dest` has a
    /// negative size.
    pub fn draw_into(&mut self, target: &mut PixMut, dest: &Box) -> NinePatchResult<()> {
        if !dest.is_valid() {
            return Err(NinePatchError::InvalidDestination(format!(
                "negative size {}x{}",
                dest.w, dest.h
            )));
        }
        let pix = self.render(dest.w as u32, dest.h as u32)?;
        target.blit(&pix, dest.x, dest.y);
        Ok(())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Build a nine-patch from a bordered source image.
///
/// Equivalent to [`NinePatch::new`].
pub fn build_nine_patch(source: &Pix, options: StretchOptions) -> NinePatchResult<NinePatch> {
    NinePatch::new(source, options)
}

/// Derive content insets from the pad rectangle.
fn padding_for(interior: &Pix, pad: &Box) -> NinePatchResult<Edges> {
    let bounds = Box::from_size(interior.width(), interior.height());
    if !pad.is_valid() || !bounds.contains_box(pad) {
        return Err(NinePatchError::MalformedGeometry {
            region: "pad rectangle",
            rect: *pad,
            width: interior.width(),
            height: interior.height(),
        });
    }
    Ok(Edges::new(
        pad.x as u32,
        pad.y as u32,
        (bounds.w - pad.right()) as u32,
        (bounds.h - pad.bottom()) as u32,
    ))
}
