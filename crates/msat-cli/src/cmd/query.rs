// crates/msat-cli/src/cmd/query.rs

use anyhow::Context;
use clap::Args;
use log::debug;
use msat_core::Rect;

use crate::io::matrix_file::{load_table, MatrixArgs};

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub matrix: MatrixArgs,

    /// Rectangle corners "x0,y0,x1,y1" (any order, may be out of range). Repeatable.
    #[arg(long = "rect", required = true, allow_hyphen_values = true)]
    pub rects: Vec<String>,
}

pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    let rects = args
        .rects
        .iter()
        .map(|s| parse_rect(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let table = load_table(&args.matrix)?;
    debug!("query: {} rect(s) on {}", rects.len(), args.matrix.r#in);

    for r in rects {
        println!(
            "{},{},{},{} sum={} avg={:.6}",
            r.x0,
            r.y0,
            r.x1,
            r.y1,
            table.sum_rect(r),
            table.average_rect(r)
        );
    }
    Ok(())
}

fn parse_rect(s: &str) -> anyhow::Result<Rect> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        anyhow::bail!("--rect expects x0,y0,x1,y1, got {s:?}");
    }
    let mut v = [0i64; 4];
    for (slot, p) in v.iter_mut().zip(&parts) {
        *slot = p
            .parse()
            .with_context(|| format!("--rect {s:?}: bad coordinate {p:?}"))?;
    }
    Ok(Rect::from((v[0], v[1], v[2], v[3])))
}
