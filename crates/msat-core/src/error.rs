// crates/msat-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SatError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SatError {
    #[error("invalid dimensions: {width}x{height} (max {max} per axis)")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("short buffer: need {need} bytes, got {got}")]
    ShortBuffer { need: usize, got: usize },

    #[error("out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
}
