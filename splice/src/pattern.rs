//! Decoding of whole `.splice` files

use crate::{
    cursor::Cursor,
    header::Header,
    track::Track,
};
use log::debug;
use std::{
    fmt,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

/// The decoded contents of a `.splice` file
///
/// A pattern stores the hardware version of the drum machine it was saved with, the tempo
/// it plays at and any number of [`Track`]s, in the order they were stored.
///
/// ```no_run
/// # use splice::Pattern;
/// // Decode a pattern straight from disk
/// let pattern = Pattern::from_path("pattern_1.splice")?;
///
/// // Or from bytes you already have in memory
/// let bytes = std::fs::read("pattern_1.splice")?;
/// let pattern = Pattern::try_from(bytes.as_slice())?;
///
/// print!("{pattern}");
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Decoding is all-or-nothing: either the entire file is valid and a full [`Pattern`] is
/// returned, or an error is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pattern {
    /// The version of the hardware the pattern was saved with
    pub hw_version: String,

    /// The tempo in beats per minute
    pub tempo: f32,

    /// The tracks, in the order they were stored
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Decode a pattern from bytes with specific [`DecodeOptions`]
    ///
    /// [`Pattern::try_from()`] does the same with the default (strict) options.
    pub fn from_bytes_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, FromBytesError> {
        let mut cursor = Cursor::new(bytes);
        let Header { hw_version, tempo } = Header::read(&mut cursor, options)?;

        let mut tracks = Vec::new();
        while !cursor.is_empty() {
            tracks.push(Track::read(&mut cursor, tracks.len())?);
        }

        debug!("Decoded {} track(s) from {} bytes", tracks.len(), bytes.len());

        Ok(Self {
            hw_version,
            tempo,
            tracks,
        })
    }

    /// Deserialize a pattern from an arbitrary I/O reader
    ///
    /// The reader is read to its end before decoding starts.
    pub fn from_reader<R>(reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        Self::from_reader_with(reader, &DecodeOptions::default())
    }

    /// Deserialize a pattern from an arbitrary I/O reader with specific [`DecodeOptions`]
    pub fn from_reader_with<R>(
        mut reader: R,
        options: &DecodeOptions,
    ) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes_with(&bytes, options)?)
    }

    /// Deserialize a pattern from a path on disk (.splice)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        Self::from_path_with(path, &DecodeOptions::default())
    }

    /// Deserialize a pattern from a path on disk (.splice) with specific [`DecodeOptions`]
    pub fn from_path_with<P>(path: P, options: &DecodeOptions) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader_with(file, options)?)
    }
}

impl TryFrom<&[u8]> for Pattern {
    type Error = FromBytesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes_with(bytes, &DecodeOptions::default())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.hw_version)?;
        // Shortest round-trip digits, never exponent notation (1e-5 prints as 0.00001)
        writeln!(f, "Tempo: {}", self.tempo)?;

        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }

        Ok(())
    }
}

/// Settings that change how strictly a pattern is decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Should decoding fail when the file doesn't start with [`SIGNATURE`](crate::SIGNATURE)?
    ///
    /// Older tooling never checked the signature, so files in the wild might not carry it.
    pub check_signature: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            check_signature: true,
        }
    }
}

/// Errors that might be returned from [`Pattern::try_from()`]
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FromBytesError {
    /// The file doesn't start with [`SIGNATURE`](crate::SIGNATURE)
    #[error("Expected the file to start with \"SPLICE\", found \"{}\"", .found.escape_ascii())]
    InvalidSignature { found: [u8; 6] },

    /// There aren't enough bytes to hold the header
    #[error("The file is {len} byte(s), which is too short to hold the header")]
    TruncatedInput { len: usize },

    /// A track record claims more bytes than there are left
    #[error(
        "Track {index} at offset {offset} needs {needed} byte(s), but only {remaining} remain"
    )]
    TruncatedTrack {
        index: usize,
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}

/// Errors that might be returned from [`Pattern::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The bytes that were read are not a valid pattern
    #[error("Decoding the pattern failed")]
    FromBytes(#[from] FromBytesError),
}

/// Errors that might be returned from [`Pattern::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Could not open the file for reading
    #[error("Could not open the file for reading")]
    FileOpen(#[from] io::Error),

    /// Deserialization from the file failed
    #[error("Reading the pattern from file failed")]
    Read(#[from] FromReaderError),
}

impl FromPathError {
    /// The format error, if the failure wasn't caused by I/O
    pub fn format_error(&self) -> Option<&FromBytesError> {
        match self {
            Self::Read(FromReaderError::FromBytes(error)) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        header::{HEADER_LEN, SIGNATURE},
        track::Steps,
    };
    use std::io::Cursor;

    const KICK: [u8; 25] = [
        0x28, 0x00, 0x00, 0x00, 0x04, 0x6B, 0x69, 0x63, 0x6B, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    const CLAP: [u8; 25] = [
        0x01, 0x00, 0x00, 0x00, 0x04, 0x63, 0x6C, 0x61, 0x70, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    ];

    fn header(hw_version: &str, tempo: f32) -> Vec<u8> {
        let mut bytes = vec![0; HEADER_LEN];
        bytes[..6].copy_from_slice(SIGNATURE);
        bytes[14..14 + hw_version.len()].copy_from_slice(hw_version.as_bytes());
        bytes[46..50].copy_from_slice(&tempo.to_le_bytes());
        bytes
    }

    fn decode(path: &str) -> Pattern {
        Pattern::from_path(path).unwrap_or_else(|error| panic!("{path}: {error}"))
    }

    #[test]
    fn pattern_1() {
        let pattern = Pattern::try_from(include_bytes!("../test/pattern_1.splice").as_slice())
            .expect("could not decode pattern");

        assert_eq!(pattern.hw_version, "0.808-alpha");
        assert_eq!(pattern.tempo, 120.0);
        assert_eq!(pattern.tracks.len(), 6);
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha
Tempo: 120
(0) kick\t|x---|x---|x---|x---|
(1) snare\t|----|x---|----|x---|
(2) clap\t|----|x-x-|----|----|
(3) hh-open\t|--x-|--x-|x-x-|--x-|
(4) hh-close\t|x---|x---|----|x--x|
(5) cowbell\t|----|----|--x-|----|
"
        );
    }

    #[test]
    fn pattern_2() {
        let pattern = decode("test/pattern_2.splice");

        assert_eq!(pattern.tempo, 98.4);
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha
Tempo: 98.4
(0) kick\t|x---|----|x---|----|
(1) snare\t|----|x---|----|x---|
(3) hh-open\t|--x-|--x-|x-x-|--x-|
(5) cowbell\t|----|----|x---|----|
"
        );
    }

    #[test]
    fn pattern_3() {
        let pattern = decode("test/pattern_3.splice");

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha
Tempo: 118
(40) kick\t|x---|----|x---|----|
(1) clap\t|----|x---|----|x---|
(3) hh-open\t|--x-|--x-|x-x-|--x-|
(5) low-tom\t|----|---x|----|----|
(12) mid-tom\t|----|----|x---|----|
(9) hi-tom\t|----|----|-x--|----|
"
        );
    }

    #[test]
    fn pattern_4() {
        let pattern = decode("test/pattern_4.splice");

        assert_eq!(pattern.hw_version, "0.909");
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.909
Tempo: 240
(0) SubKick\t|----|----|----|----|
(1) Kick\t|x---|----|x---|----|
(99) Maracas\t|x-x-|x-x-|x-x-|x-x-|
(255) Low Conga\t|----|x---|----|x---|
"
        );
    }

    #[test]
    fn pattern_5() {
        let pattern = decode("test/pattern_5.splice");

        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.708-alpha
Tempo: 999
(1) Kick\t|x---|----|x---|----|
(2) HiHat\t|x-x-|x-x-|x-x-|x-x-|
"
        );
    }

    #[test]
    fn no_tracks() {
        let bytes = header("0.808-alpha", 120.0);
        let pattern = Pattern::try_from(bytes.as_slice()).unwrap();

        assert!(pattern.tracks.is_empty());
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha\nTempo: 120\n"
        );
    }

    #[test]
    fn tracks_keep_their_order() {
        let mut bytes = header("0.808-alpha", 120.0);
        bytes.extend_from_slice(&KICK);
        bytes.extend_from_slice(&CLAP);

        let pattern = Pattern::try_from(bytes.as_slice()).unwrap();
        assert_eq!(pattern.tracks.len(), 2);

        for (track, record) in pattern.tracks.iter().zip([KICK, CLAP]) {
            let mut solo = header("0.808-alpha", 120.0);
            solo.extend_from_slice(&record);

            let solo = Pattern::try_from(solo.as_slice()).unwrap();
            assert_eq!(solo.tracks.as_slice(), std::slice::from_ref(track));
        }

        assert_eq!(pattern.tracks[0].sample_name, "kick");
        assert_eq!(pattern.tracks[1].sample_id, 1);
        assert_eq!(
            pattern.tracks[1].steps,
            Steps::new([
                false, false, false, false, true, false, false, false, false, false, false, false,
                true, false, false, false
            ])
        );
    }

    #[test]
    fn deterministic() {
        let bytes = include_bytes!("../test/pattern_3.splice").as_slice();
        assert_eq!(Pattern::try_from(bytes), Pattern::try_from(bytes));
    }

    #[test]
    fn truncated_input() {
        let bytes = header("0.808-alpha", 120.0);

        assert_eq!(
            Pattern::try_from(&bytes[..HEADER_LEN - 1]),
            Err(FromBytesError::TruncatedInput { len: 49 })
        );
    }

    #[test]
    fn truncated_track() {
        let mut bytes = header("0.808-alpha", 120.0);
        bytes.extend_from_slice(&KICK);
        bytes.extend_from_slice(&CLAP[..20]);

        assert_eq!(
            Pattern::try_from(bytes.as_slice()),
            Err(FromBytesError::TruncatedTrack {
                index: 1,
                offset: HEADER_LEN + KICK.len(),
                needed: CLAP.len(),
                remaining: 20
            })
        );
    }

    #[test]
    fn trailing_bytes() {
        let mut bytes = header("0.808-alpha", 120.0);
        bytes.extend_from_slice(&KICK);
        bytes.extend_from_slice(&[0x05, 0x00]);

        assert_eq!(
            Pattern::try_from(bytes.as_slice()),
            Err(FromBytesError::TruncatedTrack {
                index: 1,
                offset: HEADER_LEN + KICK.len(),
                needed: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn signature() {
        let mut bytes = header("0.808-alpha", 120.0);
        bytes[..6].copy_from_slice(b"SPLICF");

        assert_eq!(
            Pattern::try_from(bytes.as_slice()),
            Err(FromBytesError::InvalidSignature { found: *b"SPLICF" })
        );

        let options = DecodeOptions {
            check_signature: false,
        };
        let pattern = Pattern::from_bytes_with(&bytes, &options).unwrap();
        assert_eq!(pattern.hw_version, "0.808-alpha");
    }

    #[test]
    fn signature_message() {
        let error = FromBytesError::InvalidSignature { found: *b"SPL\0SH" };

        assert_eq!(
            error.to_string(),
            "Expected the file to start with \"SPLICE\", found \"SPL\\x00SH\""
        );
    }

    #[test]
    fn tempo_notation() {
        let tempo = |tempo| {
            let bytes = header("0.909", tempo);
            let rendered = Pattern::try_from(bytes.as_slice()).unwrap().to_string();
            rendered.lines().nth(1).unwrap().to_owned()
        };

        assert_eq!(tempo(999.0), "Tempo: 999");
        assert_eq!(tempo(0.5), "Tempo: 0.5");
        assert_eq!(tempo(0.00001), "Tempo: 0.00001");
        assert_eq!(tempo(1e21), "Tempo: 1000000000000000000000");
        assert_eq!(tempo(f32::INFINITY), "Tempo: inf");
    }

    #[test]
    fn from_reader() {
        let mut bytes = header("0.909", 240.0);
        bytes.extend_from_slice(&KICK);

        let pattern = Pattern::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(pattern.tempo, 240.0);
        assert_eq!(pattern.tracks[0].sample_id, 40);

        assert!(matches!(
            Pattern::from_reader(Cursor::new(vec![0; 10])),
            Err(FromReaderError::FromBytes(FromBytesError::TruncatedInput { len: 10 }))
        ));
    }

    #[test]
    fn missing_file() {
        let error = Pattern::from_path("test/meow.splice").unwrap_err();

        assert!(matches!(error, FromPathError::FileOpen(_)));
        assert_eq!(error.format_error(), None);
    }
}
