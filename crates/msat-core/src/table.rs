// crates/msat-core/src/table.rs

use std::io::{self, Write};

use log::{debug, trace};

use crate::error::{Result, SatError};
use crate::print::write_grid;
use crate::rect::Rect;
use crate::validate::{validate_buffer, validate_dimensions};

/// Largest accepted width or height.
pub const MAX_DIM: usize = 4096;

/// Summed-area table over a `width x height` grid of byte samples.
///
/// Cell (x, y) lives at linear offset `x + y * width` in both grids.
/// `prefix[x + y * width]` holds the sum of every sample in the inclusive
/// rectangle (0, 0)..=(x, y). The largest possible value is
/// `255 * 4096 * 4096`, which needs more than 32 bits, so prefix cells are u64.
///
/// Both grids are built once and never mutated afterwards. Dropping the
/// table releases them together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummedAreaTable {
    width: usize,
    height: usize,
    samples: Vec<u8>,
    prefix: Vec<u64>,
}

impl SummedAreaTable {
    /// Build a table from `data`, laid out as `x + y * width`.
    ///
    /// `data` may be longer than `width * height`; extra bytes are ignored.
    pub fn new(data: &[u8], width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        let n = validate_buffer(data.len(), width, height)?;

        let mut samples = alloc_grid::<u8>(n)?;
        samples.extend_from_slice(&data[..n]);

        // samples is dropped on this error path, nothing leaks
        let mut prefix = alloc_grid::<u64>(n)?;
        precompute(&samples, width, height, &mut prefix);

        let table = Self {
            width,
            height,
            samples,
            prefix,
        };
        debug!(
            "SAT: built {}x{} table (total={})",
            width,
            height,
            table.total()
        );
        Ok(table)
    }

    /// The 0x0 table. Every query on it yields 0.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            samples: Vec::new(),
            prefix: Vec::new(),
        }
    }

    /// Deep copy with allocation failures reported instead of aborting.
    /// The prefix grid is copied as-is, not recomputed.
    pub fn try_copy(&self) -> Result<Self> {
        let samples = copy_grid(&self.samples)?;
        let prefix = copy_grid(&self.prefix)?;

        debug!("SAT: copied {}x{} table", self.width, self.height);
        Ok(Self {
            width: self.width,
            height: self.height,
            samples,
            prefix,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn prefix(&self) -> &[u64] {
        &self.prefix
    }

    pub fn sample(&self, x: usize, y: usize) -> Option<u8> {
        self.index(x, y).map(|i| self.samples[i])
    }

    pub fn prefix_at(&self, x: usize, y: usize) -> Option<u64> {
        self.index(x, y).map(|i| self.prefix[i])
    }

    /// Sum of the whole grid.
    pub fn total(&self) -> u64 {
        self.prefix.last().copied().unwrap_or(0)
    }

    /// Sum of the rectangle spanned by (x0, y0) and (x1, y1), inclusive.
    ///
    /// Corners may come in any order and may lie outside the grid; the
    /// rectangle is clamped to the grid and a rectangle that misses the
    /// grid entirely sums to 0. Runs in O(1).
    pub fn sum(&self, x0: i64, y0: i64, x1: i64, y1: i64) -> u64 {
        self.sum_rect(Rect::new(x0, y0, x1, y1))
    }

    pub fn sum_rect(&self, rect: Rect) -> u64 {
        match rect.resolve(self.width, self.height) {
            Some(r) => self.sum_resolved(r),
            None => {
                trace!("SAT: {:?} outside {}x{} grid", rect, self.width, self.height);
                0
            }
        }
    }

    /// Mean sample value over the clamped rectangle; 0.0 when the sum is 0.
    pub fn average(&self, x0: i64, y0: i64, x1: i64, y1: i64) -> f64 {
        self.average_rect(Rect::new(x0, y0, x1, y1))
    }

    pub fn average_rect(&self, rect: Rect) -> f64 {
        let Some(r) = rect.resolve(self.width, self.height) else {
            trace!("SAT: {:?} outside {}x{} grid", rect, self.width, self.height);
            return 0.0;
        };
        let sum = self.sum_resolved(r);
        if sum == 0 {
            return 0.0;
        }
        sum as f64 / r.area() as f64
    }

    /// Write the raw samples, one row per line.
    pub fn write_samples<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_grid(out, &self.samples, self.width, self.height)
    }

    /// Write the prefix grid, one row per line.
    pub fn write_prefix<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_grid(out, &self.prefix, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u64 {
        self.prefix[x + y * self.width]
    }

    /// Inclusion-exclusion over four prefix cells. `r` must be canonical and
    /// inside the grid.
    fn sum_resolved(&self, r: Rect) -> u64 {
        let (x0, y0, x1, y1) = (r.x0 as usize, r.y0 as usize, r.x1 as usize, r.y1 as usize);

        // add the diagonal back before subtracting so u64 never underflows
        let mut total = self.at(x1, y1);
        if x0 > 0 && y0 > 0 {
            total += self.at(x0 - 1, y0 - 1);
        }
        if y0 > 0 {
            total -= self.at(x1, y0 - 1);
        }
        if x0 > 0 {
            total -= self.at(x0 - 1, y1);
        }
        total
    }
}

impl Default for SummedAreaTable {
    fn default() -> Self {
        Self::empty()
    }
}

fn alloc_grid<T>(n: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(n).map_err(|_| SatError::OutOfMemory {
        bytes: n.saturating_mul(std::mem::size_of::<T>()),
    })?;
    Ok(v)
}

fn copy_grid<T: Copy>(src: &[T]) -> Result<Vec<T>> {
    let mut v = alloc_grid::<T>(src.len())?;
    v.extend_from_slice(src);
    Ok(v)
}

/// Single forward pass filling `prefix` in `x + y * width` order.
///
/// prefix(x, y) = s(x, y) + prefix(x-1, y) + prefix(x, y-1) - prefix(x-1, y-1),
/// with out-of-grid terms taken as 0.
fn precompute(samples: &[u8], width: usize, height: usize, prefix: &mut Vec<u64>) {
    for y in 0..height {
        for x in 0..width {
            let i = x + y * width;
            let s = samples[i] as u64;
            let v = match (x, y) {
                (0, 0) => s,
                (_, 0) => s + prefix[i - 1],
                (0, _) => s + prefix[i - width],
                _ => s + prefix[i - 1] + prefix[i - width] - prefix[i - width - 1],
            };
            prefix.push(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impossible_allocation_is_out_of_memory() {
        let err = alloc_grid::<u64>(usize::MAX).unwrap_err();
        assert_eq!(err, SatError::OutOfMemory { bytes: usize::MAX });
        assert!(err.to_string().starts_with("out of memory"));

        let err = alloc_grid::<u8>(usize::MAX).unwrap_err();
        assert_eq!(err, SatError::OutOfMemory { bytes: usize::MAX });
    }

    #[test]
    fn copy_grid_duplicates_into_fresh_storage() {
        let src = [1u64, 2, 3];
        let v = copy_grid(&src).unwrap();
        assert_eq!(v, src);
        assert!(copy_grid::<u8>(&[]).unwrap().is_empty());
    }
}
