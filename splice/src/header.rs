//! The fixed-layout start of every `.splice` file
//!
//! ```text
//!  offset  length  value
//!       0       6  "SPLICE"
//!       6       7  padding
//!      13       1  reserved
//!      14      32  hardware version, null-padded ASCII
//!      46       4  tempo, little-endian f32
//! ```

use crate::{
    cursor::Cursor,
    pattern::{DecodeOptions, FromBytesError},
    text,
};
use log::debug;

/// The magic bytes every `.splice` file starts with
pub const SIGNATURE: &[u8; 6] = b"SPLICE";

/// The number of bytes taken up by the header, after which the tracks start
pub const HEADER_LEN: usize = 50;

const PADDING_LEN: usize = 7;
const RESERVED_LEN: usize = 1;
const HW_VERSION_LEN: usize = 32;

/// The metadata stored in the header
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Header {
    pub hw_version: String,
    pub tempo: f32,
}

impl Header {
    /// Read the header from the start of a cursor, leaving it at the first track
    pub fn read(cursor: &mut Cursor, options: &DecodeOptions) -> Result<Self, FromBytesError> {
        let len = cursor.remaining();
        if cursor.ensure(HEADER_LEN).is_err() {
            return Err(FromBytesError::TruncatedInput { len });
        }

        let truncated = |_| FromBytesError::TruncatedInput { len };

        let signature = cursor.read_array::<6>().map_err(truncated)?;
        if options.check_signature && &signature != SIGNATURE {
            return Err(FromBytesError::InvalidSignature { found: signature });
        }

        cursor.skip(PADDING_LEN + RESERVED_LEN).map_err(truncated)?;
        let hw_version = cursor.read_bytes(HW_VERSION_LEN).map_err(truncated)?;
        let hw_version = text::nul_dropped(hw_version);
        let tempo = cursor.read_f32_le().map_err(truncated)?;

        debug!("Read header: hardware version {hw_version:?}, tempo {tempo}");

        Ok(Self { hw_version, tempo })
    }
}
