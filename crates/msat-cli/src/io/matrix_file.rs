// crates/msat-cli/src/io/matrix_file.rs

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use msat_core::SummedAreaTable;

/// Raw matrix input: a file of bytes laid out row after row.
#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Raw byte file, cell (x, y) at offset x + y * width
    #[arg(long)]
    pub r#in: String,

    /// Matrix width (columns)
    #[arg(long)]
    pub width: usize,

    /// Matrix height (rows)
    #[arg(long)]
    pub height: usize,
}

/// Read a raw matrix file and build its summed-area table.
pub fn load_table(m: &MatrixArgs) -> Result<SummedAreaTable> {
    let bytes = std::fs::read(&m.r#in).with_context(|| format!("read matrix {}", m.r#in))?;
    let table = SummedAreaTable::new(&bytes, m.width, m.height)
        .with_context(|| format!("build {}x{} table from {}", m.width, m.height, m.r#in))?;

    if bytes.len() > table.len() {
        warn!(
            "{}: {} trailing bytes ignored ({} used)",
            m.r#in,
            bytes.len() - table.len(),
            table.len()
        );
    }
    Ok(table)
}
