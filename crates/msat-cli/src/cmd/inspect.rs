// crates/msat-cli/src/cmd/inspect.rs

use std::io::Write;

use clap::{Args, ValueEnum};

use crate::io::matrix_file::{load_table, MatrixArgs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Show {
    None,
    Samples,
    Prefix,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub matrix: MatrixArgs,

    /// Also print a grid: the raw samples or the prefix sums
    #[arg(long, value_enum, default_value_t = Show::None)]
    pub show: Show,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let table = load_table(&args.matrix)?;
    let w = table.width() as i64;
    let h = table.height() as i64;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "matrix_path   = {}", args.matrix.r#in)?;
    writeln!(out, "width         = {}", table.width())?;
    writeln!(out, "height        = {}", table.height())?;
    writeln!(out, "cells         = {}", table.len())?;
    writeln!(out, "total         = {}", table.total())?;
    writeln!(out, "average       = {:.6}", table.average(0, 0, w - 1, h - 1))?;
    writeln!(out, "samples_crc32 = 0x{:08x}", crc32fast::hash(table.samples()))?;

    match args.show {
        Show::None => {}
        Show::Samples => table.write_samples(&mut out)?,
        Show::Prefix => table.write_prefix(&mut out)?,
    }
    Ok(())
}
