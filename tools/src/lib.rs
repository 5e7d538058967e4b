//! # Splice Tools
//!
//! Drum machines save their patterns as `.splice` files: a small binary format holding the
//! hardware version, a tempo and a list of 16-step tracks. This crate provides a command-line
//! utility for looking inside them.
//!
//! ## Inspect
//!
//! ```console
//! splice-tools-inspect 0.1.0
//! Decode .splice files and print their patterns
//!
//! USAGE:
//!     splice-tools inspect [OPTIONS] [PATHS]...
//!
//! ARGS:
//!     <PATHS>...    The path(s) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!         --json         Print the patterns as JSON instead
//!         --lenient      Accept files that don't start with the SPLICE signature
//!     -r, --recursive    Search folders recursively
//!     -v, --verbose      Log more about what is being decoded (repeat for more detail)
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ splice-tools inspect pattern_2.splice
//! pattern_2.splice
//! Saved with HW Version: 0.808-alpha
//! Tempo: 98.4
//! (0) kick	|x---|----|x---|----|
//! (1) snare	|----|x---|----|x---|
//! (3) hh-open	|--x-|--x-|x-x-|--x-|
//! (5) cowbell	|----|----|x---|----|
//! ```
//!
//! ## Check
//!
//! ```console
//! $ splice-tools check -r patterns/
//! ok   patterns/pattern_1.splice (6 tracks)
//! FAIL patterns/broken.splice: Track 2 at offset 110 needs 28 byte(s), but only 9 remain
//! 1 of 2 file(s) decoded
//! ```

pub mod check;
pub mod inspect;
pub(crate) mod utils;
