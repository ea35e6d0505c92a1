//! Heap-allocated arbitrary-precision unsigned integers.

mod add;
mod bits;
mod cmp;
mod div;
mod div_digit;
mod encoding;
mod mul;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Digit, Word};
use alloc::{vec, vec::Vec};
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Arbitrary-precision heap-allocated unsigned integer.
///
/// Unlike [`Digit`], this type grows as needed and never wraps. The value is stored as a
/// little-endian sequence of digits which is kept canonically trimmed: the most significant
/// digit is never zero, and the value `0` is the empty sequence. This makes the digit count a
/// direct measure of magnitude, which the division routines rely on.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigUnsigned {
    /// Digits stored from least significant to most significant.
    pub(crate) digits: Vec<Digit>,
}

impl BigUnsigned {
    /// Get the value `0`.
    pub const fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self {
            digits: vec![Digit::ONE],
        }
    }

    /// Is this [`BigUnsigned`] equal to zero?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Is this [`BigUnsigned`] equal to one?
    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == Digit::ONE
    }

    /// Is this integer value an odd number?
    pub fn is_odd(&self) -> bool {
        self.digits.first().is_some_and(|d| d.0 & 1 == 1)
    }

    /// Create a [`BigUnsigned`] from little-endian digits, trimming any most significant zeros.
    pub fn from_digits(digits: impl Into<Vec<Digit>>) -> Self {
        let mut ret = Self {
            digits: digits.into(),
        };
        ret.normalize();
        ret
    }

    /// Create a [`BigUnsigned`] from little-endian [`Word`]s (i.e. word-sized unsigned integers).
    #[inline]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let digits: Vec<Digit> = words.into_iter().map(Digit).collect();
        Self::from_digits(digits)
    }

    /// Borrow the digits of this [`BigUnsigned`], least significant first.
    #[inline]
    pub fn as_digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Convert this [`BigUnsigned`] into its inner digits.
    #[inline]
    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }

    /// Copy the digits of this [`BigUnsigned`] out as [`Word`]s, least significant first.
    pub fn to_words(&self) -> Vec<Word> {
        self.digits.iter().map(|d| d.0).collect()
    }

    /// Number of significant digits. Zero has no digits.
    #[inline]
    pub fn ndigits(&self) -> usize {
        self.digits.len()
    }

    /// Get the digit at position `index`, where `0` is the least significant digit.
    ///
    /// Positions past the most significant digit read as [`Digit::ZERO`].
    #[inline]
    pub fn digit(&self, index: usize) -> Digit {
        self.digits.get(index).copied().unwrap_or(Digit::ZERO)
    }

    /// Set the digit at position `index`, growing or trimming as needed to keep the
    /// representation canonical.
    pub fn set_digit(&mut self, index: usize, digit: Digit) {
        if index >= self.digits.len() {
            if digit.is_zero_vartime() {
                return;
            }
            self.digits.resize(index + 1, Digit::ZERO);
        }
        self.digits[index] = digit;
        self.normalize();
    }

    /// Trim most significant zero digits.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while self.digits.last().is_some_and(Digit::is_zero_vartime) {
            self.digits.pop();
        }
    }
}

impl AsRef<[Digit]> for BigUnsigned {
    fn as_ref(&self) -> &[Digit] {
        self.as_digits()
    }
}

impl From<u8> for BigUnsigned {
    fn from(n: u8) -> Self {
        Self::from(Digit::from(n))
    }
}

impl From<u16> for BigUnsigned {
    fn from(n: u16) -> Self {
        Self::from(Digit::from(n))
    }
}

impl From<u32> for BigUnsigned {
    fn from(n: u32) -> Self {
        Self::from(Digit::from(n))
    }
}

impl From<u64> for BigUnsigned {
    fn from(n: u64) -> Self {
        Self::from(n as u128)
    }
}

impl From<u128> for BigUnsigned {
    fn from(mut n: u128) -> Self {
        let mut digits = Vec::with_capacity(u128::BITS.div_ceil(Digit::BITS) as usize);
        while n != 0 {
            digits.push(Digit(n as Word));
            n >>= Digit::BITS;
        }
        Self { digits }
    }
}

impl From<Digit> for BigUnsigned {
    fn from(digit: Digit) -> Self {
        Self::from_digits(vec![digit])
    }
}

impl From<&[Digit]> for BigUnsigned {
    fn from(digits: &[Digit]) -> Self {
        Self::from_digits(digits)
    }
}

impl From<Vec<Digit>> for BigUnsigned {
    fn from(digits: Vec<Digit>) -> Self {
        Self::from_digits(digits)
    }
}

impl num_traits::Zero for BigUnsigned {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for BigUnsigned {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl num_traits::Unsigned for BigUnsigned {}

#[cfg(feature = "zeroize")]
impl Zeroize for BigUnsigned {
    fn zeroize(&mut self) {
        self.digits.zeroize();
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUnsigned(0x{self:X})")
    }
}

impl fmt::LowerHex for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        let mut iter = self.digits.iter().rev();
        match iter.next() {
            None => write!(f, "0"),
            Some(top) => {
                write!(f, "{:x}", top.0)?;
                for digit in iter {
                    write!(f, "{:0width$x}", digit.0, width = Digit::BYTES * 2)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::UpperHex for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        let mut iter = self.digits.iter().rev();
        match iter.next() {
            None => write!(f, "0"),
            Some(top) => {
                write!(f, "{:X}", top.0)?;
                for digit in iter {
                    write!(f, "{:0width$X}", digit.0, width = Digit::BYTES * 2)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BigUnsigned;
    use crate::{Digit, Word};
    use alloc::{format, vec};

    #[test]
    fn from_digits_trims() {
        let n = BigUnsigned::from_digits(vec![Digit(5), Digit::ZERO, Digit::ZERO]);
        assert_eq!(n.ndigits(), 1);
        assert_eq!(n, BigUnsigned::from(5u8));

        let zero = BigUnsigned::from_words([0, 0, 0]);
        assert!(zero.is_zero());
        assert_eq!(zero.ndigits(), 0);
        assert_eq!(zero, BigUnsigned::zero());
    }

    #[test]
    fn from_u128() {
        let n = BigUnsigned::from(0x0001_0000_0000_0000_0000_0000_0000_0002u128);
        assert_eq!(n.digit(0), Digit(2));
        assert_eq!(n.bits(), 113);
        assert!(BigUnsigned::from(0u128).is_zero());
        assert_eq!(BigUnsigned::from(Word::MAX as u128).ndigits(), 1);
    }

    #[test]
    fn digit_past_top_is_zero() {
        let n = BigUnsigned::from(7u8);
        assert_eq!(n.digit(0), Digit(7));
        assert_eq!(n.digit(1), Digit::ZERO);
        assert_eq!(n.digit(100), Digit::ZERO);
    }

    #[test]
    fn set_digit() {
        let mut n = BigUnsigned::zero();
        n.set_digit(2, Digit::ONE);
        assert_eq!(n.ndigits(), 3);
        n.set_digit(2, Digit::ZERO);
        assert!(n.is_zero());
        n.set_digit(5, Digit::ZERO);
        assert!(n.is_zero());
    }

    #[test]
    fn predicates() {
        assert!(BigUnsigned::one().is_one());
        assert!(!BigUnsigned::zero().is_one());
        assert!(BigUnsigned::from(3u8).is_odd());
        assert!(!BigUnsigned::zero().is_odd());
    }

    #[test]
    fn hex() {
        let n = BigUnsigned::from_words([0xABC, 1]);
        let pad = "0".repeat(Digit::BYTES * 2 - 3);
        assert_eq!(format!("{n:x}"), format!("1{pad}abc"));
        assert_eq!(format!("{n:X}"), format!("1{pad}ABC"));
        assert_eq!(format!("{:#x}", BigUnsigned::zero()), "0x0");
        assert_eq!(format!("{:?}", BigUnsigned::from(255u8)), "BigUnsigned(0xFF)");
    }
}
