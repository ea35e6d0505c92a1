//! [`BigUnsigned`] bitwise left shift operations.

use crate::{BigUnsigned, Digit};
use alloc::{vec, vec::Vec};
use core::ops::{Shl, ShlAssign};

impl BigUnsigned {
    /// Computes `self << shift` in variable time.
    ///
    /// The result grows by as many digits as needed; no bits are ever lost.
    pub fn shl_vartime(&self, shift: u32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let digit_shift = (shift / Digit::BITS) as usize;
        let bit_shift = shift % Digit::BITS;

        let mut digits: Vec<Digit> = vec![Digit::ZERO; digit_shift];
        digits.reserve(self.ndigits() + 1);

        let mut carry = Digit::ZERO;
        for &digit in &self.digits {
            let (shifted, new_carry) = digit.carrying_shl(bit_shift);
            digits.push(Digit(shifted.0 | carry.0));
            carry = new_carry;
        }
        digits.push(carry);

        Self::from_digits(digits)
    }
}

impl Shl<u32> for BigUnsigned {
    type Output = BigUnsigned;

    fn shl(self, shift: u32) -> BigUnsigned {
        self.shl_vartime(shift)
    }
}

impl Shl<u32> for &BigUnsigned {
    type Output = BigUnsigned;

    fn shl(self, shift: u32) -> BigUnsigned {
        self.shl_vartime(shift)
    }
}

impl ShlAssign<u32> for BigUnsigned {
    fn shl_assign(&mut self, shift: u32) {
        *self = self.shl_vartime(shift);
    }
}
