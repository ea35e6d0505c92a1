//! `From`-like conversions for [`Digit`].

use super::Digit;
use crate::Word;

impl Digit {
    /// Create a [`Digit`] from a `u8` integer (const-friendly)
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        Digit(n as Word)
    }

    /// Create a [`Digit`] from a `u16` integer (const-friendly)
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        Digit(n as Word)
    }

    /// Create a [`Digit`] from a `u32` integer (const-friendly)
    #[must_use]
    pub const fn from_u32(n: u32) -> Self {
        #[allow(trivial_numeric_casts)]
        Digit(n as Word)
    }

    /// Create a [`Digit`] from a `u64` integer (const-friendly)
    #[cfg(target_pointer_width = "64")]
    #[must_use]
    pub const fn from_u64(n: u64) -> Self {
        Digit(n)
    }
}

impl From<u8> for Digit {
    #[inline]
    fn from(n: u8) -> Digit {
        Digit(n.into())
    }
}

impl From<u16> for Digit {
    #[inline]
    fn from(n: u16) -> Digit {
        Digit(n.into())
    }
}

impl From<u32> for Digit {
    #[inline]
    fn from(n: u32) -> Digit {
        #[allow(trivial_numeric_casts)]
        Digit(n as Word)
    }
}

#[cfg(target_pointer_width = "64")]
impl From<u64> for Digit {
    #[inline]
    fn from(n: u64) -> Digit {
        Digit(n)
    }
}

impl From<Digit> for Word {
    #[inline]
    fn from(digit: Digit) -> Word {
        digit.0
    }
}
