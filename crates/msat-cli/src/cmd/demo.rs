// crates/msat-cli/src/cmd/demo.rs

use std::io::Write;

use clap::Args;
use msat_core::validate::validate_dimensions;
use msat_core::SummedAreaTable;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Side length of the square demo matrix
    #[arg(long, default_value_t = 4)]
    pub size: usize,

    /// Value stored in every cell
    #[arg(long, default_value_t = 1)]
    pub fill: u8,
}

pub fn run(args: DemoArgs) -> anyhow::Result<()> {
    let n = args.size;
    // reject before n * n can overflow or allocate
    validate_dimensions(n, n)?;
    let buffer = vec![args.fill; n * n];
    let table = SummedAreaTable::new(&buffer, n, n)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Original Mat:")?;
    table.write_samples(&mut out)?;

    let last = n as i64 - 1;
    let sum = table.sum(n as i64 / 2, 0, last, last);
    let avg = table.average(0, 0, n as i64, n as i64);
    writeln!(out, "Sum: {} Avg: {:.6}", sum, avg)?;

    let copy = table.try_copy()?;
    drop(table);

    writeln!(out, "Lookup Mat (copy):")?;
    copy.write_prefix(&mut out)?;
    Ok(())
}
