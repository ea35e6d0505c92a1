//! Division of a [`BigUnsigned`] by a single [`Digit`].

use crate::{BigUnsigned, Digit, Error, NonZero};
use core::ops::{Div, Rem};

impl BigUnsigned {
    /// Computes `self / rhs` in place, returning the remainder.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero, leaving `self` unchanged.
    pub fn div_rem_digit_assign(&mut self, rhs: Digit) -> Result<Digit, Error> {
        if rhs.is_zero_vartime() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.div_rem_digit_nz_assign(NonZero(rhs)))
    }

    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem_digit(&self, rhs: Digit) -> Result<(Self, Digit), Error> {
        let mut quotient = self.clone();
        let rem = quotient.div_rem_digit_assign(rhs)?;
        Ok((quotient, rem))
    }

    /// Schoolbook division by a digit, from the most significant digit down, carrying the
    /// running remainder as the high word of each double-word step.
    pub(crate) fn div_rem_digit_nz_assign(&mut self, rhs: NonZero<Digit>) -> Digit {
        let rhs = rhs.get();
        if rhs == Digit::ONE {
            return Digit::ZERO;
        }

        let mut rem = Digit::ZERO;
        for digit in self.digits.iter_mut().rev() {
            (*digit, rem) = Digit::div_wide(rem, *digit, rhs);
        }

        self.normalize();
        debug_assert!(rem < rhs);
        rem
    }
}

impl Div<NonZero<Digit>> for &BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: NonZero<Digit>) -> BigUnsigned {
        let mut quotient = self.clone();
        quotient.div_rem_digit_nz_assign(rhs);
        quotient
    }
}

impl Div<NonZero<Digit>> for BigUnsigned {
    type Output = BigUnsigned;

    fn div(mut self, rhs: NonZero<Digit>) -> BigUnsigned {
        self.div_rem_digit_nz_assign(rhs);
        self
    }
}

impl Rem<NonZero<Digit>> for &BigUnsigned {
    type Output = Digit;

    fn rem(self, rhs: NonZero<Digit>) -> Digit {
        self.clone().div_rem_digit_nz_assign(rhs)
    }
}

impl Rem<NonZero<Digit>> for BigUnsigned {
    type Output = Digit;

    fn rem(mut self, rhs: NonZero<Digit>) -> Digit {
        self.div_rem_digit_nz_assign(rhs)
    }
}
