pub mod error;
pub mod validate;

pub mod print;
pub mod rect;
pub mod table;

pub use crate::error::{Result, SatError};
pub use crate::rect::Rect;
pub use crate::table::{SummedAreaTable, MAX_DIM};
