//! Digit subtraction

use crate::{Digit, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};
use subtle::{Choice, CtOption};

impl Digit {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Digit, borrow: Digit) -> (Digit, Digit) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Digit(res), Digit(borrow))
    }

    /// Computes `self - rhs`, returning the wrapped result along with a flag which is `true`
    /// when the subtraction underflowed.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_sub(self, rhs: Digit) -> (Digit, bool) {
        let (res, underflow) = self.0.overflowing_sub(rhs.0);
        (Digit(res), underflow)
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Digit) -> Digit {
        Digit(self.0.wrapping_sub(rhs.0))
    }

    /// Perform checked subtraction, returning a [`CtOption`] which `is_some` only if the
    /// difference is non-negative.
    #[inline]
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> CtOption<Self> {
        let (result, underflow) = self.overflowing_sub(*rhs);
        CtOption::new(result, Choice::from(!underflow as u8))
    }
}

impl Sub for Digit {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Self> for Digit {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Digit {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

#[cfg(test)]
mod tests {
    use crate::Digit;

    #[test]
    fn sub_no_underflow() {
        assert_eq!(Digit::ONE - Digit::ONE, Digit::ZERO);
    }

    #[test]
    #[should_panic]
    fn sub_with_underflow() {
        let _ = Digit::ZERO - Digit::ONE;
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        assert_eq!(
            Digit::ZERO.borrowing_sub(Digit::ZERO, Digit::ONE),
            (Digit::MAX, Digit::ONE)
        );
        assert_eq!(
            Digit::ONE.borrowing_sub(Digit::ZERO, Digit::ONE),
            (Digit::ZERO, Digit::ZERO)
        );
    }

    #[test]
    fn overflowing_sub() {
        assert_eq!(Digit(3).overflowing_sub(Digit::ONE), (Digit(2), false));
        assert_eq!(Digit::ZERO.overflowing_sub(Digit::ONE), (Digit::MAX, true));
    }
}
