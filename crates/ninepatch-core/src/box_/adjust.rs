//! Box adjustment by insets
//!
//! Shrinking a box by content padding, and growing it back.

use super::{Box, Edges};

impl Box {
    /// Shrink the box by `edges` on each side.
    ///
    /// Width and height saturate at 0; the origin still moves by the
    /// left/top inset.
    pub fn inset(&self, edges: &Edges) -> Box {
        Box {
            x: self.x + edges.left as i32,
            y: self.y + edges.top as i32,
            w: (self.w - edges.horizontal() as i32).max(0),
            h: (self.h - edges.vertical() as i32).max(0),
        }
    }

    /// Grow the box by `edges` on each side.
    pub fn outset(&self, edges: &Edges) -> Box {
        Box {
            x: self.x - edges.left as i32,
            y: self.y - edges.top as i32,
            w: self.w + edges.horizontal() as i32,
            h: self.h + edges.vertical() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_outset_inverse() {
        let b = Box::new_unchecked(10, 20, 100, 50);
        let e = Edges::new(3, 4, 5, 6);
        let inner = b.inset(&e);
        assert_eq!(inner, Box::new_unchecked(13, 24, 92, 40));
        assert_eq!(inner.outset(&e), b);
    }

    #[test]
    fn test_inset_saturates() {
        let b = Box::new_unchecked(0, 0, 4, 4);
        let inner = b.inset(&Edges::new(3, 3, 3, 3));
        assert_eq!(inner, Box::new_unchecked(3, 3, 0, 0));
    }
}
