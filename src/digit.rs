//! Big integers are represented as a sequence of CPU word-size integers called "digits".

mod add;
mod bits;
mod cmp;
mod div;
mod from;
mod mul;
mod sub;

use crate::{NonZero, Word};
use core::fmt;
use subtle::{Choice, ConstantTimeEq, CtOption};

/// A single machine-word digit of a [`BigUnsigned`][`crate::BigUnsigned`].
///
/// The [`Digit`] type is 32-bit or 64-bit depending on the target. All bits of the inner
/// [`Word`] are used to represent larger integers.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Digit(pub Word);

impl Digit {
    /// The value `0`.
    pub const ZERO: Self = Digit(0);

    /// The value `1`.
    pub const ONE: Self = Digit(1);

    /// Maximum value this [`Digit`] can express.
    pub const MAX: Self = Digit(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = (Word::BITS / 8) as usize;

    /// Highest bit in a [`Digit`].
    pub(crate) const HI_BIT: u32 = Digit::BITS - 1;

    /// Is this digit equal to [`Digit::ZERO`]?
    #[inline]
    #[must_use]
    pub const fn is_zero_vartime(&self) -> bool {
        self.0 == 0
    }

    /// Convert to a [`NonZero<Digit>`].
    ///
    /// Returns some if the value is non-zero, and none otherwise.
    #[must_use]
    pub fn to_nz(self) -> CtOption<NonZero<Self>> {
        NonZero::new(self)
    }

    /// Is the most significant bit of this digit set?
    #[inline]
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.0 >> Self::HI_BIT == 1
    }
}

impl num_traits::Zero for Digit {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO).into()
    }
}

impl num_traits::One for Digit {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.ct_eq(&Self::ONE).into()
    }
}

impl ConstantTimeEq for Digit {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit(0x{self:X})")
    }
}

impl fmt::Display for Digit {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::Binary for Digit {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }

        write!(f, "{:0width$b}", &self.0, width = Self::BITS as usize)
    }
}

impl fmt::LowerHex for Digit {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Digit {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Digit {}

#[cfg(test)]
mod tests {
    use super::Digit;
    use alloc::format;

    #[test]
    fn debug() {
        #[cfg(target_pointer_width = "32")]
        assert_eq!(format!("{:?}", Digit(42)), "Digit(0x0000002A)");

        #[cfg(target_pointer_width = "64")]
        assert_eq!(format!("{:?}", Digit(42)), "Digit(0x000000000000002A)");
    }

    #[test]
    fn is_normalized() {
        assert!(Digit::MAX.is_normalized());
        assert!(Digit(1 << Digit::HI_BIT).is_normalized());
        assert!(!Digit(Digit::MAX.0 >> 1).is_normalized());
        assert!(!Digit::ONE.is_normalized());
    }
}
