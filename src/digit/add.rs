//! Digit addition

use crate::{Digit, primitives::carrying_add};
use core::ops::{Add, AddAssign};
use subtle::{Choice, CtOption};

impl Digit {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Digit, carry: Digit) -> (Digit, Digit) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Digit(res), Digit(carry))
    }

    /// Computes `self + rhs`, returning the wrapped result along with a flag which is `true`
    /// when the addition overflowed a single digit.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_add(self, rhs: Digit) -> (Digit, bool) {
        let (res, overflow) = self.0.overflowing_add(rhs.0);
        (Digit(res), overflow)
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Digit) -> Digit {
        Digit(self.0.wrapping_add(rhs.0))
    }

    /// Perform checked addition, returning a [`CtOption`] which `is_some` only if the sum
    /// fits in a single digit.
    #[inline]
    #[must_use]
    pub fn checked_add(&self, rhs: &Self) -> CtOption<Self> {
        let (result, overflow) = self.overflowing_add(*rhs);
        CtOption::new(result, Choice::from(!overflow as u8))
    }
}

impl Add for Digit {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("attempted to add with overflow")
    }
}

impl Add<&Self> for Digit {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Digit {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
