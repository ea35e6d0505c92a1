//! [`BigUnsigned`] subtraction operations.

use crate::{BigUnsigned, Digit};
use core::ops::{Sub, SubAssign};

impl BigUnsigned {
    /// Computes `self - rhs`, returning `None` if the result would be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.ndigits() < rhs.ndigits() {
            return None;
        }

        let mut ret = self.clone();
        let borrow = sub_assign_slice(&mut ret.digits, &rhs.digits);
        if borrow.is_zero_vartime() {
            ret.normalize();
            Some(ret)
        } else {
            None
        }
    }

    /// Computes `self -= other * 2^(Digit::BITS * shift)` in place.
    ///
    /// The result must be non-negative. This is the window subtraction step of long division.
    pub fn sub_assign_shifted(&mut self, other: &Self, shift: usize) {
        if other.is_zero() {
            return;
        }

        debug_assert!(self.ndigits() >= other.ndigits() + shift, "subtraction underflow");
        let borrow = sub_assign_slice(&mut self.digits[shift..], &other.digits);
        debug_assert!(borrow.is_zero_vartime(), "subtraction underflow");
        self.normalize();
    }
}

/// Computes `lhs -= rhs` where `lhs` has at least as many digits as `rhs`, propagating the
/// borrow through the remaining digits of `lhs`. Returns the final borrow.
fn sub_assign_slice(lhs: &mut [Digit], rhs: &[Digit]) -> Digit {
    debug_assert!(lhs.len() >= rhs.len());
    let mut borrow = Digit::ZERO;

    for (i, x) in lhs.iter_mut().enumerate() {
        let y = rhs.get(i).copied().unwrap_or(Digit::ZERO);
        if i >= rhs.len() && borrow.is_zero_vartime() {
            break;
        }
        (*x, borrow) = x.borrowing_sub(y, borrow);
    }

    borrow
}

impl Sub for BigUnsigned {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&BigUnsigned> for BigUnsigned {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn sub(self, rhs: &BigUnsigned) -> BigUnsigned {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl SubAssign<&BigUnsigned> for BigUnsigned {
    fn sub_assign(&mut self, rhs: &BigUnsigned) {
        assert!(*self >= *rhs, "attempted to subtract with underflow");
        self.sub_assign_shifted(rhs, 0);
    }
}

impl SubAssign for BigUnsigned {
    fn sub_assign(&mut self, rhs: BigUnsigned) {
        *self -= &rhs;
    }
}
