//! [`BigUnsigned`] bitwise right shift operations.

use crate::{BigUnsigned, Digit};
use alloc::vec::Vec;
use core::ops::{Shr, ShrAssign};

impl BigUnsigned {
    /// Computes `self >> shift` in variable time.
    ///
    /// Shifting by at least [`BigUnsigned::bits`] yields zero.
    pub fn shr_vartime(&self, shift: u32) -> Self {
        let digit_shift = (shift / Digit::BITS) as usize;
        if digit_shift >= self.ndigits() {
            return Self::zero();
        }

        let bit_shift = shift % Digit::BITS;
        let mut digits = Vec::with_capacity(self.ndigits() - digit_shift);
        let mut carry = Digit::ZERO;

        for &digit in self.digits[digit_shift..].iter().rev() {
            let (shifted, new_carry) = digit.carrying_shr(bit_shift);
            digits.push(Digit(shifted.0 | carry.0));
            carry = new_carry;
        }
        digits.reverse();

        Self::from_digits(digits)
    }
}

impl Shr<u32> for BigUnsigned {
    type Output = BigUnsigned;

    fn shr(self, shift: u32) -> BigUnsigned {
        self.shr_vartime(shift)
    }
}

impl Shr<u32> for &BigUnsigned {
    type Output = BigUnsigned;

    fn shr(self, shift: u32) -> BigUnsigned {
        self.shr_vartime(shift)
    }
}

impl ShrAssign<u32> for BigUnsigned {
    fn shr_assign(&mut self, shift: u32) {
        *self = self.shr_vartime(shift);
    }
}
