use super::Digit;

impl Digit {
    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u32 {
        Digit::BITS - self.0.leading_zeros()
    }

    /// Calculate the number of leading zeros in the binary representation of this number.
    #[inline(always)]
    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Calculate the number of trailing zeros in the binary representation of this number.
    #[inline(always)]
    #[must_use]
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Computes `self << shift`.
    ///
    /// # Panics
    /// - if `shift` overflows `Digit::BITS`.
    #[inline(always)]
    #[must_use]
    #[track_caller]
    pub const fn shl(self, shift: u32) -> Self {
        Digit(self.0 << shift)
    }

    /// Computes `self >> shift`.
    ///
    /// # Panics
    /// - if `shift` overflows `Digit::BITS`.
    #[inline(always)]
    #[must_use]
    #[track_caller]
    pub const fn shr(self, shift: u32) -> Self {
        Digit(self.0 >> shift)
    }

    /// Computes `self << shift`, also returning the bits shifted out at the top (which are
    /// positioned at the bottom of the returned carry).
    ///
    /// `shift` must be in the range `0..Digit::BITS`.
    #[inline(always)]
    #[must_use]
    pub(crate) const fn carrying_shl(self, shift: u32) -> (Self, Self) {
        if shift == 0 {
            (self, Digit::ZERO)
        } else {
            (self.shl(shift), self.shr(Digit::BITS - shift))
        }
    }

    /// Computes `self >> shift`, also returning the bits shifted out at the bottom (which are
    /// positioned at the top of the returned carry).
    ///
    /// `shift` must be in the range `0..Digit::BITS`.
    #[inline(always)]
    #[must_use]
    pub(crate) const fn carrying_shr(self, shift: u32) -> (Self, Self) {
        if shift == 0 {
            (self, Digit::ZERO)
        } else {
            (self.shr(shift), self.shl(Digit::BITS - shift))
        }
    }
}
