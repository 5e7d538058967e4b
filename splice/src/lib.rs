//! Decoding of drum machine `.splice` pattern files
//!
//! A `.splice` file stores a single drum pattern: the hardware version it was saved with, a
//! tempo, and a list of tracks that each trigger a sample on some of 16 steps. This crate
//! only reads the format, it doesn't write it.
//!
//! ```no_run
//! let pattern = splice::decode_file("pattern_1.splice")?;
//! assert_eq!(pattern.tempo, 120.0);
//!
//! // Saved with HW Version: 0.808-alpha
//! // Tempo: 120
//! // (0) kick	|x---|x---|x---|x---|
//! // (1) snare	|----|x---|----|x---|
//! print!("{pattern}");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod cursor;
mod header;
pub mod pattern;
pub mod text;
pub mod track;

pub use header::{HEADER_LEN, SIGNATURE};
pub use pattern::{DecodeOptions, FromBytesError, FromPathError, FromReaderError, Pattern};
pub use track::{Steps, Track};

use std::path::Path;

/// Decode a pattern from the raw bytes of a `.splice` file
pub fn decode(bytes: &[u8]) -> Result<Pattern, FromBytesError> {
    Pattern::try_from(bytes)
}

/// Read and decode the `.splice` file at a path
///
/// I/O failures and format failures are reported as different variants of [`FromPathError`].
pub fn decode_file<P>(path: P) -> Result<Pattern, FromPathError>
where
    P: AsRef<Path>,
{
    Pattern::from_path(path)
}
