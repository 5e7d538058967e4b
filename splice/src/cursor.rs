//! Bounds-checked reading over a byte slice

use thiserror::Error;

/// A read position into a byte slice that checks every access
///
/// Reads either succeed in full and advance the position, or fail with an [`OutOfBounds`]
/// error and leave the position untouched.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the beginning of a slice
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// The current offset from the start of the slice
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Has everything been read?
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail unless at least `needed` more bytes can be read
    pub fn ensure(&self, needed: usize) -> Result<(), OutOfBounds> {
        if self.remaining() < needed {
            return Err(OutOfBounds {
                position: self.position,
                needed,
                remaining: self.remaining(),
            });
        }

        Ok(())
    }

    /// Read the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], OutOfBounds> {
        self.ensure(len)?;

        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;

        Ok(bytes)
    }

    /// Read the next `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], OutOfBounds> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8, OutOfBounds> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Read a little-endian IEEE-754 single precision float
    pub fn read_f32_le(&mut self) -> Result<f32, OutOfBounds> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Move past `len` bytes without looking at them
    pub fn skip(&mut self, len: usize) -> Result<(), OutOfBounds> {
        self.read_bytes(len).map(|_| ())
    }
}

/// A read that would have gone past the end of the slice
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Reading {needed} byte(s) at position {position} with only {remaining} remaining")]
pub(crate) struct OutOfBounds {
    /// Where the read was attempted
    pub position: usize,

    /// How many bytes the read required
    pub needed: usize,

    /// How many bytes were actually left
    pub remaining: usize,
}
