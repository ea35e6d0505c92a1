//! [`BigUnsigned`] multiplication operations.

use crate::{BigUnsigned, Digit};
use alloc::{vec, vec::Vec};
use core::ops::{Mul, MulAssign};

impl BigUnsigned {
    /// Multiply `self` by a single digit, returning a value with at most one more digit.
    pub fn mul_digit(&self, rhs: Digit) -> Self {
        if rhs.is_zero_vartime() {
            return Self::zero();
        }

        let mut digits = Vec::with_capacity(self.ndigits() + 1);
        let mut carry = Digit::ZERO;
        for &digit in &self.digits {
            let lo;
            (lo, carry) = digit.carrying_mul_add(rhs, Digit::ZERO, carry);
            digits.push(lo);
        }
        digits.push(carry);

        Self::from_digits(digits)
    }

    /// Multiply `self` by `rhs` using schoolbook multiplication.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut digits = vec![Digit::ZERO; self.ndigits() + rhs.ndigits()];
        for (i, &x) in self.digits.iter().enumerate() {
            let mut carry = Digit::ZERO;
            for (j, &y) in rhs.digits.iter().enumerate() {
                (digits[i + j], carry) = x.carrying_mul_add(y, digits[i + j], carry);
            }
            digits[i + rhs.ndigits()] = carry;
        }

        Self::from_digits(digits)
    }
}

impl Mul for BigUnsigned {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        BigUnsigned::mul(&self, &rhs)
    }
}

impl Mul<&BigUnsigned> for BigUnsigned {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        BigUnsigned::mul(&self, rhs)
    }
}

impl Mul<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned::mul(self, rhs)
    }
}

impl Mul<Digit> for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: Digit) -> BigUnsigned {
        self.mul_digit(rhs)
    }
}

impl MulAssign<&BigUnsigned> for BigUnsigned {
    fn mul_assign(&mut self, rhs: &BigUnsigned) {
        *self = BigUnsigned::mul(self, rhs);
    }
}

impl MulAssign for BigUnsigned {
    fn mul_assign(&mut self, rhs: BigUnsigned) {
        *self *= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUnsigned, Digit};

    #[test]
    fn mul_digit() {
        let n = BigUnsigned::from_words([Digit::MAX.0, Digit::MAX.0]);
        // (2^2W - 1) * 2 = (1, MAX, MAX - 1)
        assert_eq!(
            n.mul_digit(Digit(2)),
            BigUnsigned::from_words([Digit::MAX.0 - 1, Digit::MAX.0, 1])
        );
        assert!(n.mul_digit(Digit::ZERO).is_zero());
        assert_eq!(n.mul_digit(Digit::ONE), n);
        assert!(BigUnsigned::zero().mul_digit(Digit::MAX).is_zero());
    }

    #[test]
    fn mul() {
        // (2^W - 1)^2 = 2^2W - 2^(W+1) + 1 = (MAX - 1, 1)
        let n = BigUnsigned::from(Digit::MAX);
        assert_eq!(&n * &n, BigUnsigned::from_words([1, Digit::MAX.0 - 1]));
        assert_eq!(
            BigUnsigned::from(1000u32) * BigUnsigned::from(1000u32),
            BigUnsigned::from(1_000_000u32)
        );
        assert!((&n * &BigUnsigned::zero()).is_zero());
    }
}
