//! Random number generator support.

use super::BigUnsigned;
use crate::{Digit, Word};
use alloc::{vec, vec::Vec};
use rand_core::{RngCore, TryRngCore};

impl BigUnsigned {
    /// Generate a random [`BigUnsigned`] in the range `[0, 2^bit_length)`.
    ///
    /// Returns the error of the underlying generator if it fails.
    pub fn try_random_bits<R: TryRngCore + ?Sized>(
        rng: &mut R,
        bit_length: u32,
    ) -> Result<Self, R::Error> {
        let mut bytes = random_buffer(bit_length);
        rng.try_fill_bytes(&mut bytes)?;
        Ok(from_random_bytes(bytes, bit_length))
    }

    /// Generate a random [`BigUnsigned`] in the range `[0, 2^bit_length)`.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        let mut bytes = random_buffer(bit_length);
        rng.fill_bytes(&mut bytes);
        from_random_bytes(bytes, bit_length)
    }

    /// Generate a random [`BigUnsigned`] of at most `ndigits` digits.
    pub fn random_digits<R: RngCore + ?Sized>(rng: &mut R, ndigits: usize) -> Self {
        Self::from_digits(
            (0..ndigits)
                .map(|_| {
                    let mut buf = [0u8; Digit::BYTES];
                    rng.fill_bytes(&mut buf);
                    Digit(Word::from_le_bytes(buf))
                })
                .collect::<Vec<_>>(),
        )
    }
}

fn random_buffer(bit_length: u32) -> Vec<u8> {
    vec![0u8; bit_length.div_ceil(8) as usize]
}

/// Interpret `bytes` as little endian, masking off bits at and above `bit_length`.
fn from_random_bytes(mut bytes: Vec<u8>, bit_length: u32) -> BigUnsigned {
    let partial = bit_length % 8;
    if partial != 0 {
        if let Some(top) = bytes.last_mut() {
            *top &= (1u8 << partial) - 1;
        }
    }

    BigUnsigned::from_le_slice(&bytes)
}
