//! Tracks: one sample and the steps it triggers on

use crate::{
    cursor::{Cursor, OutOfBounds},
    pattern::FromBytesError,
    text,
};
use log::trace;
use std::fmt;

const STEP_COUNT: usize = 16;

/// Which of the 16 steps in a loop trigger a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Steps([bool; STEP_COUNT]);

impl Steps {
    /// The number of steps in a loop
    pub const LEN: usize = STEP_COUNT;

    /// The number of steps rendered together between bars
    const GROUP_LEN: usize = 4;

    /// Create steps from their on/off states
    pub const fn new(steps: [bool; Self::LEN]) -> Self {
        Self(steps)
    }

    /// Decode steps as stored on disk
    ///
    /// `0x00` means off, anything else means on.
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes.map(|byte| byte != 0))
    }

    /// Access the on/off state of every step
    pub fn as_array(&self) -> &[bool; Self::LEN] {
        &self.0
    }

    /// Iterate over the on/off state of every step
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Does a note trigger on a given step?
    ///
    /// Steps outside of the loop never trigger.
    pub fn is_active(&self, step: usize) -> bool {
        self.0.get(step).copied().unwrap_or(false)
    }

    /// The number of steps that trigger a note
    pub fn active_count(&self) -> usize {
        self.iter().filter(|step| *step).count()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|")?;
        for group in self.0.chunks(Self::GROUP_LEN) {
            for step in group {
                write!(f, "{}", if *step { 'x' } else { '-' })?;
            }
            write!(f, "|")?;
        }

        Ok(())
    }
}

/// A single instrument line in a [`Pattern`](crate::Pattern)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Track {
    /// The identifier of the sample this track plays
    pub sample_id: u8,

    /// The name of the sample this track plays (can be empty)
    pub sample_name: String,

    /// The steps the sample is triggered on
    pub steps: Steps,
}

impl Track {
    /// The number of bytes a track takes up before its name
    pub const MIN_LEN: usize = 5;

    const PADDING_LEN: usize = 3;

    /// The number of bytes this track takes up when stored
    pub fn encoded_len(&self) -> usize {
        Self::MIN_LEN + self.sample_name.len() + Steps::LEN
    }

    /// Read one track record, leaving the cursor right after it
    ///
    /// `index` is the position of the track in the pattern, used for error reporting. The
    /// whole record is bounds-checked before anything is read, so on failure the cursor
    /// has not moved.
    pub(crate) fn read(cursor: &mut Cursor, index: usize) -> Result<Self, FromBytesError> {
        let offset = cursor.position();
        let remaining = cursor.remaining();
        let truncated = |needed| FromBytesError::TruncatedTrack {
            index,
            offset,
            needed,
            remaining,
        };

        // The name length is the last byte before the name, and determines the record length
        let name_len = cursor
            .clone()
            .read_bytes(Self::MIN_LEN)
            .map_err(|_| truncated(Self::MIN_LEN))?[Self::MIN_LEN - 1] as usize;

        let record_len = Self::MIN_LEN + name_len + Steps::LEN;
        let record = cursor
            .read_bytes(record_len)
            .map_err(|_| truncated(record_len))?;

        let track =
            Self::parse(Cursor::new(record), name_len).map_err(|_| truncated(record_len))?;
        trace!("Read track {index} at offset {offset}: {track}");

        Ok(track)
    }

    fn parse(mut record: Cursor, name_len: usize) -> Result<Self, OutOfBounds> {
        let sample_id = record.read_u8()?;
        record.skip(Self::PADDING_LEN + 1)?;
        let sample_name = text::raw(record.read_bytes(name_len)?);
        let steps = Steps::from_bytes(record.read_array()?);

        Ok(Self {
            sample_id,
            sample_name,
            steps,
        })
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.sample_id, self.sample_name, self.steps)
    }
}
