//! Render cache
//!
//! Rendered images are memoized by source identity and output size.
//! Entries are never evicted; the cache lives as long as its owner.

use crate::error::NinePatchResult;
use ninepatch_core::{Pix, PixId};
use std::collections::HashMap;

/// Cache key: which source, rendered at which size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub source: PixId,
    pub width: u32,
    pub height: u32,
}

impl RenderKey {
    pub fn new(source: &Pix, width: u32, height: u32) -> Self {
        Self {
            source: source.id(),
            width,
            height,
        }
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to render
    pub renders: u64,
    /// Images currently stored
    pub entries: usize,
}

/// Memoized renders, keyed by [`RenderKey`]
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    entries: HashMap<RenderKey, Pix>,
    hits: u64,
    renders: u64,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previous render without counting a hit.
    pub fn get(&self, key: &RenderKey) -> Option<&Pix> {
        self.entries.get(key)
    }

    /// Return the cached image for `key`, calling `render` on a miss.
    ///
    /// The returned [`Pix`] shares its pixels with the stored entry. A
    /// failed render stores nothing.
    pub fn get_or_render<F>(&mut self, key: RenderKey, render: F) -> NinePatchResult<Pix>
    where
        F: FnOnce() -> NinePatchResult<Pix>,
    {
        if let Some(pix) = self.entries.get(&key) {
            self.hits += 1;
            log::trace!("render cache hit for {}x{}", key.width, key.height);
            return Ok(pix.clone());
        }

        log::debug!("rendering nine-patch at {}x{}", key.width, key.height);
        let pix = render()?;
        self.renders += 1;
        self.entries.insert(key, pix.clone());
        Ok(pix)
    }

    /// Number of stored images
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored image. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            renders: self.renders,
            entries: self.entries.len(),
        }
    }
}
