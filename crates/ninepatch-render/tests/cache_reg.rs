//! Render cache regression test
//!
//! Tests memoization of renders per output size:
//!   1. Repeated renders share one image and render only once
//!   2. Distinct sizes and distinct nine-patches get their own entries
//!   3. Drawing through the cache into a larger target

use ninepatch_core::{Box, PixMut};
use ninepatch_render::{CacheStats, NinePatch, StretchOptions};
use ninepatch_test::{NinePatchSpec, RegParams, interior_pixel};

fn build_patch() -> NinePatch {
    let source = NinePatchSpec::new(4, 4)
        .stretch((1, 2), (1, 2))
        .pad((1, 2), (1, 2))
        .build()
        .expect("build fixture");
    NinePatch::new(&source, StretchOptions::default()).expect("build nine-patch")
}

#[test]
fn cache_reg_idempotent() {
    let mut rp = RegParams::new("cache_idempotent");

    let mut patch = build_patch();
    rp.check(patch.cache_stats() == CacheStats::default(), "fresh cache");

    let first = patch.render(16, 12).expect("first render");
    let second = patch.render(16, 12).expect("second render");
    rp.check(first.id() == second.id(), "shared image");
    rp.compare_pix(&first, &second);
    rp.compare_pix(&first, &patch.render_uncached(16, 12).expect("uncached"));

    let stats = patch.cache_stats();
    rp.compare_values(1.0, stats.renders as f64, 0.0);
    rp.compare_values(1.0, stats.hits as f64, 0.0);
    rp.compare_values(1.0, stats.entries as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn cache_reg_distinct_keys() {
    let mut rp = RegParams::new("cache_keys");

    let mut patch = build_patch();
    let sizes = [(8, 8), (16, 8), (8, 16), (0, 0), (8, 8), (16, 8)];
    for (w, h) in sizes {
        patch.render(w, h).expect("render");
    }
    let stats = patch.cache_stats();
    rp.compare_values(4.0, stats.renders as f64, 0.0);
    rp.compare_values(2.0, stats.hits as f64, 0.0);
    rp.compare_values(4.0, stats.entries as f64, 0.0);

    // a second nine-patch over the same pixels keeps its own cache
    let mut other = build_patch();
    let a = patch.render(8, 8).expect("render");
    let b = other.render(8, 8).expect("render other");
    rp.check(a.id() != b.id(), "separate caches");
    rp.compare_pix(&a, &b);
    rp.compare_values(1.0, other.cache_stats().renders as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn cache_reg_draw_into() {
    let mut rp = RegParams::new("cache_draw");

    let mut patch = build_patch();
    let mut target = PixMut::new(20, 20).expect("target");
    let dest = Box::new_unchecked(3, 4, 10, 8);

    patch.draw_into(&mut target, &dest).expect("draw");
    patch.draw_into(&mut target, &dest).expect("draw again");
    rp.compare_values(1.0, patch.cache_stats().renders as f64, 0.0);
    rp.compare_values(1.0, patch.cache_stats().hits as f64, 0.0);

    rp.check(target.get_pixel(3, 4) == Some(interior_pixel(0, 0)), "origin");
    rp.check(
        target.get_pixel(12, 11) == Some(interior_pixel(3, 3)),
        "far corner",
    );
    rp.check(target.get_pixel(13, 12) == Some(0), "outside dest");

    let content = patch.content_rect(&dest);
    rp.check(content == Box::new_unchecked(4, 5, 8, 6), "content rect");

    // partly off the target: only the overlap is written
    let mut small = PixMut::new(4, 4).expect("small target");
    patch
        .draw_into(&mut small, &Box::new_unchecked(-2, -2, 6, 6))
        .expect("draw clipped");
    rp.check(
        small.get_pixel(3, 3) == Some(interior_pixel(3, 3)),
        "clipped far corner",
    );

    assert!(rp.cleanup());
}
