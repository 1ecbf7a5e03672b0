// crates/msat-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "msat-cli")]
#[command(about = "Summed-area table tools for byte measurement matrices", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a small constant matrix and run the example queries
    Demo(cmd::demo::DemoArgs),

    /// Load a raw byte matrix and print its dimensions, totals and checksum
    Inspect(cmd::inspect::InspectArgs),

    /// Sum and average one or more rectangles of a raw byte matrix
    Query(cmd::query::QueryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Demo(args) => cmd::demo::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Query(args) => cmd::query::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
