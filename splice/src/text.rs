//! The two ways text is stored in a `.splice` file
//!
//! The hardware version in the header is a fixed-width, null-padded field, while track
//! names are length-prefixed and taken as-is, null bytes included.

/// Decode a null-padded field, dropping _every_ `0x00` byte
///
/// This isn't a trim: a null byte in the middle of the field is dropped as well, and the
/// remaining bytes keep their relative order.
pub fn nul_dropped(bytes: &[u8]) -> String {
    let kept: Vec<u8> = bytes.iter().copied().filter(|byte| *byte != 0).collect();
    String::from_utf8_lossy(&kept).into_owned()
}

/// Decode a length-prefixed field, keeping every byte
pub fn raw(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
