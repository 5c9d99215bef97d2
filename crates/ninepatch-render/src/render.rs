//! Nine-patch compositing
//!
//! Output layout for a `W` x `H` render, with `c0`, `c2` the fixed column
//! widths and `r0`, `r2` the fixed row heights:
//!
//! ```text
//!   x:  0        c0             max(0, W - c2)
//!       +--------+--------------+--------+  y: 0
//!       |   0    |  1 (h-fill)  |   2    |
//!       +--------+--------------+--------+  y: r0
//!       | 3      |  4 (center)  |      5 |
//!       | v-fill |  both fills  | v-fill |
//!       +--------+--------------+--------+  y: max(0, H - r2)
//!       |   6    |      7       |   8    |
//!       +--------+--------------+--------+
//! ```
//!
//! Patches are drawn in index order, so when the output is smaller than
//! the fixed regions the later corners overwrite the earlier ones.

use crate::error::NinePatchResult;
use crate::options::StretchOptions;
use crate::patches::{PatchGrid, PatchIndex};
use crate::stretch::{Span, fixed_span, stretch_spans};
use ninepatch_core::{Pix, PixMut};

/// Render `grid` into a new `width` x `height` image.
///
/// Areas that no patch covers stay transparent. A zero-sized request
/// yields an empty image.
pub fn render(
    grid: &PatchGrid,
    options: &StretchOptions,
    width: u32,
    height: u32,
) -> NinePatchResult<Pix> {
    let mut out = PixMut::new(width, height)?;
    render_into(&mut out, grid, options);
    Ok(out.into())
}

/// Render `grid` over the whole of `out`.
pub fn render_into(out: &mut PixMut, grid: &PatchGrid, options: &StretchOptions) {
    let (width, height) = (out.width(), out.height());
    let [c0, c1, c2] = grid.columns();
    let [r0, r1, r2] = grid.rows();

    let fill_w = width as i64 - c0 as i64 - c2 as i64;
    let fill_h = height as i64 - r0 as i64 - r2 as i64;
    let far_x = (width as i64 - c2 as i64).max(0) as i32;
    let far_y = (height as i64 - r2 as i64).max(0) as i32;

    let cols = [
        fixed_span(c0, 0),
        stretch_spans(options.horizontal(), c1, c0 as i32, fill_w),
        fixed_span(c2, far_x),
    ];
    let rows = [
        fixed_span(r0, 0),
        stretch_spans(options.vertical(), r1, r0 as i32, fill_h),
        fixed_span(r2, far_y),
    ];

    for index in PatchIndex::ALL {
        compose(
            out,
            grid.get(index),
            &cols[index.column()],
            &rows[index.row()],
        );
    }
}

/// Copy `patch` into `out` once for every pair of column and row spans.
fn compose(out: &mut PixMut, patch: &Pix, cols: &[Span], rows: &[Span]) {
    if patch.is_empty() {
        return;
    }
    for row in rows {
        for col in cols {
            out.rasterop(col.dst, row.dst, col.len, row.len, patch, col.src, row.src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::inspect_border;
    use ninepatch_core::Box;
    use ninepatch_core::color::TRANSPARENT;
    use ninepatch_test::{NinePatchSpec, decode_interior_pixel, interior_pixel};

    fn grid_for(spec: &NinePatchSpec) -> PatchGrid {
        let source = spec.build().unwrap();
        let markers = inspect_border(&source);
        let interior = source.remove_border(1).unwrap();
        PatchGrid::slice(&interior, &markers.stretch).unwrap()
    }

    #[test]
    fn test_render_native_size_is_identity() {
        let spec = NinePatchSpec::new(6, 5).stretch((2, 2), (1, 3));
        let grid = grid_for(&spec);
        let out = render(&grid, &StretchOptions::default(), 6, 5).unwrap();
        for y in 0..5 {
            for x in 0..6 {
                assert_eq!(out.get_pixel(x, y), Some(interior_pixel(x, y)));
            }
        }
    }

    #[test]
    fn test_render_full_stretch_center() {
        let spec = NinePatchSpec::new(3, 3).stretch((0, 3), (0, 3));
        let grid = grid_for(&spec);
        let out = render(&grid, &StretchOptions::default(), 10, 10).unwrap();
        assert_eq!((out.width(), out.height()), (10, 10));
        // multiplicities(3, 10) = [3, 4, 3]
        assert_eq!(out.get_pixel(0, 0), Some(interior_pixel(0, 0)));
        assert_eq!(out.get_pixel(3, 3), Some(interior_pixel(1, 1)));
        assert_eq!(out.get_pixel(6, 6), Some(interior_pixel(1, 1)));
        assert_eq!(out.get_pixel(7, 7), Some(interior_pixel(2, 2)));
    }

    #[test]
    fn test_render_zero_size() {
        let grid = grid_for(&NinePatchSpec::new(3, 3).stretch((1, 1), (1, 1)));
        let out = render(&grid, &StretchOptions::default(), 0, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_smaller_than_corners() {
        // corners are 2x2, output 3x3: right corners start at x = 1
        let grid = grid_for(&NinePatchSpec::new(5, 5).stretch((2, 1), (2, 1)));
        let out = render(&grid, &StretchOptions::default(), 3, 3).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(interior_pixel(0, 0)));
        assert_eq!(out.get_pixel(1, 0), Some(interior_pixel(3, 0)));
        assert_eq!(out.get_pixel(2, 2), Some(interior_pixel(4, 4)));
        assert_eq!(out.get_pixel(0, 1), Some(interior_pixel(0, 3)));
    }

    #[test]
    fn test_render_tile_modes() {
        let grid = grid_for(&NinePatchSpec::new(4, 4).stretch((1, 2), (1, 2)));
        let opts = StretchOptions::tiled();
        let out = render(&grid, &opts, 9, 9).unwrap();
        // stretch columns 1,2 repeat from x = 1 over 7 pixels
        let row: Vec<u32> = (0..9)
            .map(|x| decode_interior_pixel(out.get_pixel(x, 0).unwrap()).unwrap().0)
            .collect();
        assert_eq!(row, vec![0, 1, 2, 1, 2, 1, 2, 1, 3]);
        let col: Vec<u32> = (0..9)
            .map(|y| decode_interior_pixel(out.get_pixel(0, y).unwrap()).unwrap().1)
            .collect();
        assert_eq!(col, vec![0, 1, 2, 1, 2, 1, 2, 1, 3]);
    }

    #[test]
    fn test_render_mixed_modes() {
        let grid = grid_for(&NinePatchSpec::new(4, 4).stretch((1, 2), (1, 2)));
        let opts = StretchOptions::default().tile_horizontal(true);
        let out = render(&grid, &opts, 7, 7).unwrap();
        let (x, y) = decode_interior_pixel(out.get_pixel(3, 3).unwrap()).unwrap();
        // tiled horizontally: column 3 -> source 1; duplicated vertically
        // multiplicities(2, 5) = [3, 2]: row 3 -> source 1
        assert_eq!((x, y), (1, 1));
    }

    #[test]
    fn test_render_zero_thickness_stretch_leaves_gap() {
        let source = NinePatchSpec::new(4, 4).build().unwrap();
        let interior = source.remove_border(1).unwrap();
        let grid = PatchGrid::slice(&interior, &Box::new_unchecked(2, 2, 0, 0)).unwrap();
        let out = render(&grid, &StretchOptions::default(), 6, 6).unwrap();
        assert_eq!(out.get_pixel(2, 0), Some(TRANSPARENT));
        assert_eq!(out.get_pixel(3, 3), Some(TRANSPARENT));
        assert_eq!(out.get_pixel(4, 4), Some(interior_pixel(2, 2)));
    }
}
