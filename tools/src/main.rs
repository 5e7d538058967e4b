use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use splice_tools::check::{check, CheckArgs};
use splice_tools::inspect::{inspect, InspectArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Log more about what is being decoded (repeat for more detail)
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Inspect(InspectArgs),
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(wild::args());

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Inspect(args) => inspect(&args),
        Command::Check(args) => check(&args),
    }
}
