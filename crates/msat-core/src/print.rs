// crates/msat-core/src/print.rs

use std::fmt::Display;
use std::io::{self, Write};

/// Write a `width x height` grid as text, one row per line.
///
/// Cell (x, y) is read from `grid[x + y * width]`; every value is followed by
/// a single space. Cells missing from a short `grid` are skipped.
pub fn write_grid<W, T>(out: &mut W, grid: &[T], width: usize, height: usize) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    for y in 0..height {
        for x in 0..width {
            if let Some(v) = grid.get(x + y * width) {
                write!(out, "{} ", v)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
