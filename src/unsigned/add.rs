//! [`BigUnsigned`] addition operations.

use crate::{BigUnsigned, Digit};
use alloc::vec::Vec;
use core::{
    cmp,
    ops::{Add, AddAssign},
};

impl BigUnsigned {
    /// Computes `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        let ndigits = cmp::max(self.ndigits(), rhs.ndigits());
        let mut digits = Vec::with_capacity(ndigits + 1);
        let mut carry = Digit::ZERO;

        for i in 0..ndigits {
            let digit;
            (digit, carry) = self.digit(i).carrying_add(rhs.digit(i), carry);
            digits.push(digit);
        }
        digits.push(carry);

        Self::from_digits(digits)
    }

    /// Computes `self + rhs` for a single digit `rhs`.
    pub fn add_digit(&self, rhs: Digit) -> Self {
        self.add(&Self::from(rhs))
    }
}

impl Add for BigUnsigned {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        BigUnsigned::add(&self, &rhs)
    }
}

impl Add<&BigUnsigned> for BigUnsigned {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        BigUnsigned::add(&self, rhs)
    }
}

impl Add<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned::add(self, rhs)
    }
}

impl AddAssign<&BigUnsigned> for BigUnsigned {
    fn add_assign(&mut self, rhs: &BigUnsigned) {
        *self = BigUnsigned::add(self, rhs);
    }
}

impl AddAssign for BigUnsigned {
    fn add_assign(&mut self, rhs: BigUnsigned) {
        *self += &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUnsigned, Digit};

    #[test]
    fn add_with_carry() {
        let a = BigUnsigned::from_words([Digit::MAX.0, Digit::MAX.0]);
        let sum = &a + &BigUnsigned::one();
        assert_eq!(sum, BigUnsigned::from_words([0, 0, 1]));
    }

    #[test]
    fn add_zero() {
        let a = BigUnsigned::from(1234u32);
        assert_eq!(&a + &BigUnsigned::zero(), a);
        assert_eq!(BigUnsigned::zero() + BigUnsigned::zero(), BigUnsigned::zero());
    }

    #[test]
    fn add_digit() {
        assert_eq!(
            BigUnsigned::from(41u8).add_digit(Digit::ONE),
            BigUnsigned::from(42u8)
        );
    }
}
