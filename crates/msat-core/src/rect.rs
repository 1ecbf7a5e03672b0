// crates/msat-core/src/rect.rs

/// Axis-aligned query rectangle given by two inclusive corner points.
///
/// Corners may arrive in any order and may lie outside the grid; the table
/// normalizes them with [`Rect::resolve`] before touching the prefix grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    #[inline]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// Reorder each axis independently so (x0, y0) is upper-left and
    /// (x1, y1) is lower-right.
    #[inline]
    pub fn canonical(self) -> Rect {
        let (x0, x1) = if self.x1 < self.x0 { (self.x1, self.x0) } else { (self.x0, self.x1) };
        let (y0, y1) = if self.y1 < self.y0 { (self.y1, self.y0) } else { (self.y0, self.y1) };
        Rect { x0, y0, x1, y1 }
    }

    /// True when both corners sit past the same edge of a `width x height` grid.
    /// Corner order does not matter.
    pub fn is_outside(&self, width: usize, height: usize) -> bool {
        let (w, h) = (width as i64, height as i64);
        (self.x0 >= w && self.x1 >= w)
            || (self.y0 >= h && self.y1 >= h)
            || (self.x0 < 0 && self.x1 < 0)
            || (self.y0 < 0 && self.y1 < 0)
    }

    /// Clamp a canonical rect into the grid: far corner down to the last
    /// row/column, near corner up to zero.
    pub fn clamp(self, width: usize, height: usize) -> Rect {
        let (w, h) = (width as i64, height as i64);
        Rect {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(w - 1),
            y1: self.y1.min(h - 1),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    /// Inclusive cell count. Zero for an empty rect.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        ((self.x1 + 1 - self.x0) as u64) * ((self.y1 + 1 - self.y0) as u64)
    }

    /// Short-circuit, canonicalize and clamp in one step.
    /// `None` means the query touches no cell of the grid.
    pub fn resolve(self, width: usize, height: usize) -> Option<Rect> {
        if self.is_outside(width, height) {
            return None;
        }
        let r = self.canonical().clamp(width, height);
        if r.is_empty() {
            None
        } else {
            Some(r)
        }
    }
}

impl From<(i64, i64, i64, i64)> for Rect {
    fn from((x0, y0, x1, y1): (i64, i64, i64, i64)) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }
}
