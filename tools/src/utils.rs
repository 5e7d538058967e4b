use anyhow::{bail, Context, Result};
use log::debug;
use splice::{DecodeOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// The extension of drum machine pattern files
pub const EXTENSION: &str = "splice";

pub fn iter_files<'a, I>(
    paths: I,
    recursive: bool,
    extensions: &'a [&'static str],
) -> impl Iterator<Item = DirEntry> + 'a
where
    I: IntoIterator + 'a,
    <I as IntoIterator>::Item: AsRef<Path>,
{
    paths
        .into_iter()
        .flat_map(move |path| {
            let mut walk_dir = WalkDir::new(path.as_ref());
            if !recursive {
                walk_dir = walk_dir.max_depth(1);
            }

            walk_dir
        })
        .filter_map(Result::ok)
        .filter(|entry| {
            !is_hidden(entry)
                && entry.file_type().is_file()
                && extensions
                    .iter()
                    .any(|extension| *extension == entry.path().extension().unwrap_or_default())
        })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Decode a single pattern file, attaching the path to any error
pub fn decode(path: &Path, lenient: bool) -> Result<Pattern> {
    debug!("Decoding {}", path.display());

    let options = DecodeOptions {
        check_signature: !lenient,
    };

    Pattern::from_path_with(path, &options)
        .with_context(|| format!("Could not decode {}", path.display()))
}

/// The outcome of decoding every pattern file found in a set of paths, in walk order
pub struct Decoded {
    pub outcomes: Vec<(PathBuf, Result<Pattern>)>,
}

impl Decoded {
    /// The files that decoded successfully
    pub fn patterns(&self) -> impl Iterator<Item = (&Path, &Pattern)> {
        self.outcomes
            .iter()
            .filter_map(|(path, outcome)| Some((path.as_path(), outcome.as_ref().ok()?)))
    }

    /// The errors of the files that failed to decode
    pub fn failures(&self) -> impl Iterator<Item = &anyhow::Error> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| outcome.as_ref().err())
    }

    /// Fail if any of the files could not be decoded
    pub fn finish(&self) -> Result<()> {
        let failed = self.failures().count();
        if failed > 0 {
            bail!("{failed} file(s) could not be decoded");
        }

        Ok(())
    }
}

/// Decode every pattern file in a set of paths
///
/// A file that fails to decode doesn't stop the others from being decoded.
pub fn decode_all<I>(paths: I, recursive: bool, lenient: bool) -> Decoded
where
    I: IntoIterator,
    <I as IntoIterator>::Item: AsRef<Path>,
{
    let outcomes = iter_files(paths, recursive, &[EXTENSION])
        .map(|entry| {
            let path = entry.into_path();
            let outcome = decode(&path, lenient);
            (path, outcome)
        })
        .collect();

    Decoded { outcomes }
}
