//! Support for parsing and encoding in bases 2 through 36.

use crate::{BigUnsigned, Digit, NonZero, Word};
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

/// The failure result for radix parsing operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseRadixError {
    /// The input contained no digits.
    Empty,
    /// The input contained a character which is not a digit in the requested radix.
    InvalidDigit,
    /// The requested radix is outside of `2..=36`.
    InvalidRadix,
}

impl fmt::Display for ParseRadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse integer from empty string"),
            Self::InvalidDigit => write!(f, "invalid digit found in string"),
            Self::InvalidRadix => write!(f, "radix must be in the range 2..=36"),
        }
    }
}

impl core::error::Error for ParseRadixError {}

/// Largest power of `radix` which fits in a [`Digit`], along with its exponent.
const fn radix_chunk(radix: u32) -> (Word, usize) {
    let radix = radix as Word;
    let mut power = radix;
    let mut exp = 1;

    while let Some(next) = power.checked_mul(radix) {
        power = next;
        exp += 1;
    }

    (power, exp)
}

fn check_radix(radix: u32) -> Result<(), ParseRadixError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(ParseRadixError::InvalidRadix)
    }
}

impl BigUnsigned {
    /// Render this [`BigUnsigned`] in the given `radix`, using lowercase letters for digits
    /// above 9.
    ///
    /// # Panics
    /// - if `radix` is not in the range `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(
            check_radix(radix).is_ok(),
            "radix must be in the range 2..=36"
        );

        if self.is_zero() {
            return String::from("0");
        }

        // Peel off chunks of `exp` digits, least significant first, by dividing by the largest
        // power of the radix that fits in a single digit.
        let (power, exp) = radix_chunk(radix);
        let power = NonZero(Digit(power));
        let mut n = self.clone();
        let mut chunks = Vec::with_capacity(self.ndigits() * 2);
        while !n.is_zero() {
            chunks.push(n.div_rem_digit_nz_assign(power));
        }

        let mut out = String::with_capacity(chunks.len() * exp);
        let mut buf = Vec::with_capacity(exp);
        for (i, chunk) in chunks.iter().rev().enumerate() {
            buf.clear();
            let mut w = chunk.0;
            while w != 0 {
                buf.push(to_char(w % radix as Word, radix));
                w /= radix as Word;
            }

            // every chunk but the most significant one is zero-padded to full width
            if i > 0 {
                buf.resize(exp, '0');
            }
            out.extend(buf.iter().rev());
        }

        out
    }

    /// Parse a [`BigUnsigned`] from a string of digits in the given `radix`.
    ///
    /// Letters are accepted in either case and `_` may be used as a separator.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseRadixError> {
        check_radix(radix)?;

        let mut digits = src.bytes().filter(|&c| c != b'_').peekable();
        if digits.peek().is_none() {
            return Err(ParseRadixError::Empty);
        }

        let (_, exp) = radix_chunk(radix);
        let mut ret = Self::zero();
        let mut chunk: Word = 0;
        let mut chunk_len = 0;
        let mut scale: Word = 1;

        for c in digits {
            let value = char::from(c)
                .to_digit(radix)
                .ok_or(ParseRadixError::InvalidDigit)?;

            chunk = chunk * radix as Word + value as Word;
            scale *= radix as Word;
            chunk_len += 1;

            if chunk_len == exp {
                ret = ret.mul_digit(Digit(scale)).add_digit(Digit(chunk));
                (chunk, chunk_len, scale) = (0, 0, 1);
            }
        }

        if chunk_len > 0 {
            ret = ret.mul_digit(Digit(scale)).add_digit(Digit(chunk));
        }

        Ok(ret)
    }
}

fn to_char(value: Word, radix: u32) -> char {
    char::from_digit(value as u32, radix).unwrap_or('?')
}

impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl FromStr for BigUnsigned {
    type Err = ParseRadixError;

    fn from_str(src: &str) -> Result<Self, ParseRadixError> {
        Self::from_str_radix(src, 10)
    }
}

impl num_traits::Num for BigUnsigned {
    type FromStrRadixErr = ParseRadixError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseRadixError> {
        BigUnsigned::from_str_radix(src, radix)
    }
}
