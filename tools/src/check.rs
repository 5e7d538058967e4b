//! The `check` subcommand

use crate::utils::decode_all;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `check` subcommand
#[derive(Args)]
#[clap(author, version, about = "Check whether .splice files decode without errors")]
pub struct CheckArgs {
    /// The path(s) to check
    paths: Vec<PathBuf>,

    /// Search folders recursively
    #[clap(short, long)]
    recursive: bool,

    /// Accept files that don't start with the SPLICE signature
    #[clap(long)]
    lenient: bool,
}

pub fn check(args: &CheckArgs) -> Result<()> {
    let decoded = decode_all(&args.paths, args.recursive, args.lenient);

    for (path, outcome) in &decoded.outcomes {
        match outcome {
            Ok(pattern) => println!("ok   {} ({} tracks)", path.display(), pattern.tracks.len()),
            Err(error) => println!("FAIL {}: {}", path.display(), error.root_cause()),
        }
    }

    println!(
        "{} of {} file(s) decoded",
        decoded.patterns().count(),
        decoded.outcomes.len()
    );

    decoded.finish()
}
