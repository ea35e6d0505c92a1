//! Digit multiplication

use crate::{
    Digit,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};
use subtle::{Choice, CtOption};

impl Digit {
    /// Computes `self * rhs`, returning the exact double-width product as `(lo, hi)`.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Digit) -> (Digit, Digit) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Digit(lo), Digit(hi))
    }

    /// Computes `(self * rhs) + addend + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Digit, addend: Digit, carry: Digit) -> (Digit, Digit) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Digit(res), Digit(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Digit) -> Digit {
        Digit(self.0.wrapping_mul(rhs.0))
    }

    /// Perform checked multiplication, returning a [`CtOption`] which `is_some` only if the
    /// product fits in a single digit.
    #[inline]
    #[must_use]
    pub fn checked_mul(&self, rhs: &Self) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(*rhs);
        CtOption::new(lo, Choice::from(hi.is_zero_vartime() as u8))
    }
}

impl Mul for Digit {
    type Output = Digit;

    #[inline]
    fn mul(self, rhs: Digit) -> Self {
        self.checked_mul(&rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Digit> for Digit {
    type Output = Digit;

    #[inline]
    fn mul(self, rhs: &Digit) -> Self {
        self * *rhs
    }
}

impl MulAssign for Digit {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
