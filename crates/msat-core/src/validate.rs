// crates/msat-core/src/validate.rs

use crate::error::{Result, SatError};
use crate::table::MAX_DIM;

pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SatError::InvalidDimensions {
            width,
            height,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Check that `data_len` bytes cover a `width x height` grid.
/// Returns the element count on success.
///
/// Dimensions must already have passed `validate_dimensions`, so the
/// product fits comfortably in `usize`.
pub fn validate_buffer(data_len: usize, width: usize, height: usize) -> Result<usize> {
    let need = width * height;
    if data_len < need {
        return Err(SatError::ShortBuffer {
            need,
            got: data_len,
        });
    }
    Ok(need)
}
