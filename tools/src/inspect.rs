//! The `inspect` subcommand

use crate::utils::decode_all;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use splice::Pattern;
use std::{
    io::stdout,
    path::{Path, PathBuf},
};

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Decode .splice files and print their patterns",
    long_about = "Inspect goes through a set of files and folders, decodes every .splice file it finds and prints the hardware version, tempo and tracks stored in it.\n\nFiles that fail to decode are reported, but don't stop the others from being inspected."
)]
pub struct InspectArgs {
    /// The path(s) to inspect
    paths: Vec<PathBuf>,

    /// Search folders recursively
    #[clap(short, long)]
    recursive: bool,

    /// Accept files that don't start with the SPLICE signature
    #[clap(long)]
    lenient: bool,

    /// Print the patterns as JSON instead
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct Inspected<'a> {
    path: &'a Path,
    pattern: &'a Pattern,
}

pub fn inspect(args: &InspectArgs) -> Result<()> {
    if args.paths.is_empty() {
        println!("No paths provided to inspect");
        return Ok(());
    }

    let decoded = decode_all(&args.paths, args.recursive, args.lenient);
    for error in decoded.failures() {
        eprintln!("{error:#}");
    }

    let patterns: Vec<_> = decoded.patterns().collect();

    if args.json {
        let inspected: Vec<_> = patterns
            .iter()
            .map(|&(path, pattern)| Inspected { path, pattern })
            .collect();

        serde_json::to_writer_pretty(stdout().lock(), &inspected)
            .context("Could not write to JSON")?;
        println!();
    } else if let Some(((last_path, last_pattern), rest)) = patterns.split_last() {
        for (path, pattern) in rest {
            print(path, pattern);
            println!();
        }

        print(last_path, last_pattern);
    }

    decoded.finish()
}

fn print(path: &Path, pattern: &Pattern) {
    println!("{}", path.display());
    print!("{pattern}");
}
