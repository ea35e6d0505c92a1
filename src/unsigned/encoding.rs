//! Byte encoding and decoding for [`BigUnsigned`].

#[cfg(feature = "serde")]
mod serde;

use super::BigUnsigned;
use crate::{Digit, Word};
use alloc::vec::Vec;

impl BigUnsigned {
    /// Create a new [`BigUnsigned`] from the provided big endian bytes.
    ///
    /// Any number of bytes is accepted, including none (which decodes as zero). Leading zero
    /// bytes are ignored.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self::from_digits(
            bytes
                .rchunks(Digit::BYTES)
                .map(digit_from_be_chunk)
                .collect::<Vec<_>>(),
        )
    }

    /// Create a new [`BigUnsigned`] from the provided little endian bytes.
    ///
    /// Any number of bytes is accepted, including none (which decodes as zero). Trailing zero
    /// bytes are ignored.
    pub fn from_le_slice(bytes: &[u8]) -> Self {
        Self::from_digits(
            bytes
                .chunks(Digit::BYTES)
                .map(digit_from_le_chunk)
                .collect::<Vec<_>>(),
        )
    }

    /// Serialize this [`BigUnsigned`] as big-endian bytes, without leading zeros.
    ///
    /// Zero serializes as an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = self.to_le_bytes();
        out.reverse();
        out
    }

    /// Serialize this [`BigUnsigned`] as little-endian bytes, without trailing zeros.
    ///
    /// Zero serializes as an empty vector.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.ndigits() * Digit::BYTES);
        for digit in &self.digits {
            out.extend_from_slice(&digit.0.to_le_bytes());
        }

        while out.last() == Some(&0) {
            out.pop();
        }

        out
    }
}

/// Decode a big endian chunk of at most [`Digit::BYTES`] bytes.
fn digit_from_be_chunk(chunk: &[u8]) -> Digit {
    debug_assert!(chunk.len() <= Digit::BYTES);
    let mut buf = [0u8; Digit::BYTES];
    buf[Digit::BYTES - chunk.len()..].copy_from_slice(chunk);
    Digit(Word::from_be_bytes(buf))
}

/// Decode a little endian chunk of at most [`Digit::BYTES`] bytes.
fn digit_from_le_chunk(chunk: &[u8]) -> Digit {
    debug_assert!(chunk.len() <= Digit::BYTES);
    let mut buf = [0u8; Digit::BYTES];
    buf[..chunk.len()].copy_from_slice(chunk);
    Digit(Word::from_le_bytes(buf))
}
