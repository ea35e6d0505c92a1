//! [`BigUnsigned`] division operations.
//!
//! Every quotient and remainder operation below routes through [`divide`], which owns its
//! working copy of the dividend.

use crate::{BigUnsigned, Digit, Error, NonZero};
use alloc::vec;
use core::{
    cmp::Ordering,
    mem,
    ops::{Div, DivAssign, Rem, RemAssign},
};

impl BigUnsigned {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(divide(self.clone(), rhs))
    }

    /// Computes `self / rhs`, returning the quotient and remainder.
    pub fn div_rem_nz(&self, rhs: &NonZero<Self>) -> (Self, Self) {
        divide(self.clone(), rhs.as_ref())
    }

    /// Computes `self / rhs`, returning [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Computes `self % rhs`, returning [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Replaces `self` with `self / rhs`.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero, leaving `self` unchanged.
    pub fn checked_div_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        *self = divide(mem::take(self), rhs).0;
        Ok(())
    }

    /// Replaces `self` with `self % rhs`.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero, leaving `self` unchanged.
    pub fn checked_rem_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        *self = divide(mem::take(self), rhs).1;
        Ok(())
    }
}

/// Divides `x` by the non-zero `y`, returning the quotient and remainder.
///
/// Divisors of a single digit use schoolbook division by that digit. Otherwise this is Knuth's
/// Algorithm D (TAOCP vol 2, section 4.3.1): both operands are shifted so the divisor's top digit
/// has its high bit set, and each quotient digit is estimated from the top three digits of the
/// running remainder and the top two digits of the divisor. The estimate is at most one too
/// large, which is detected by comparing the trial product against the remainder window.
fn divide(mut x: BigUnsigned, y: &BigUnsigned) -> (BigUnsigned, BigUnsigned) {
    debug_assert!(!y.is_zero());

    if x.ndigits() < y.ndigits() {
        return (BigUnsigned::zero(), x);
    }

    if y.ndigits() == 1 {
        let rem = x.div_rem_digit_nz_assign(NonZero(y.digit(0)));
        return (x, BigUnsigned::from(rem));
    }

    // Normalize so the top digit of the divisor has its high bit set. The shift fits within a
    // digit, so the divisor keeps its digit count and the dividend grows by at most one digit.
    let shift = y.leading_zeros();
    let divisor = y.shl_vartime(shift);
    let mut rem = x.shl_vartime(shift);

    let dc = divisor.ndigits();
    let (d1, d0) = (divisor.digit(dc - 1), divisor.digit(dc - 2));
    debug_assert!(d1.is_normalized());

    // The quotient digit at position `j - dc` is read from the window `[j - dc, j]` of the
    // remainder. The first window starts one digit past the top of the shifted dividend, so its
    // leading digit is zero and it is always smaller than `divisor << Digit::BITS`.
    let xc = rem.ndigits();
    let mut quotient = vec![Digit::ZERO; xc - dc + 1];

    for j in (dc..=xc).rev() {
        let mut q = Digit::div3by2((rem.digit(j), rem.digit(j - 1), rem.digit(j - 2)), (d1, d0));
        let mut product = divisor.mul_digit(q);

        if rem.cmp_window(j - dc, dc + 1, &product) == Ordering::Less {
            q = q.wrapping_sub(Digit::ONE);
            product -= &divisor;
        }

        rem.sub_assign_shifted(&product, j - dc);
        quotient[j - dc] = q;
    }

    debug_assert!(rem < divisor);
    (BigUnsigned::from_digits(quotient), rem.shr_vartime(shift))
}

/// Computes `x / y`, panicking with the primitive integers' message if `y` is zero.
#[track_caller]
fn divide_or_panic(x: BigUnsigned, y: &BigUnsigned) -> (BigUnsigned, BigUnsigned) {
    if y.is_zero() {
        panic!("{}", Error::DivisionByZero);
    }

    divide(x, y)
}

impl num_traits::CheckedDiv for BigUnsigned {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        BigUnsigned::checked_div(self, rhs).ok()
    }
}

impl num_traits::CheckedRem for BigUnsigned {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        BigUnsigned::checked_rem(self, rhs).ok()
    }
}

impl Div<&NonZero<BigUnsigned>> for &BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: &NonZero<BigUnsigned>) -> BigUnsigned {
        divide(self.clone(), rhs.as_ref()).0
    }
}

impl Div<&NonZero<BigUnsigned>> for BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: &NonZero<BigUnsigned>) -> BigUnsigned {
        divide(self, rhs.as_ref()).0
    }
}

impl Div<NonZero<BigUnsigned>> for &BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: NonZero<BigUnsigned>) -> BigUnsigned {
        self / &rhs
    }
}

impl Div<NonZero<BigUnsigned>> for BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: NonZero<BigUnsigned>) -> BigUnsigned {
        self / &rhs
    }
}

impl Div<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn div(self, rhs: &BigUnsigned) -> BigUnsigned {
        divide_or_panic(self.clone(), rhs).0
    }
}

impl Div<&BigUnsigned> for BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn div(self, rhs: &BigUnsigned) -> BigUnsigned {
        divide_or_panic(self, rhs).0
    }
}

impl Div for BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn div(self, rhs: BigUnsigned) -> BigUnsigned {
        divide_or_panic(self, &rhs).0
    }
}

impl DivAssign<&NonZero<BigUnsigned>> for BigUnsigned {
    fn div_assign(&mut self, rhs: &NonZero<BigUnsigned>) {
        *self = divide(mem::take(self), rhs.as_ref()).0;
    }
}

impl DivAssign<NonZero<BigUnsigned>> for BigUnsigned {
    fn div_assign(&mut self, rhs: NonZero<BigUnsigned>) {
        *self /= &rhs;
    }
}

impl DivAssign<&BigUnsigned> for BigUnsigned {
    #[track_caller]
    fn div_assign(&mut self, rhs: &BigUnsigned) {
        *self = divide_or_panic(mem::take(self), rhs).0;
    }
}

impl DivAssign for BigUnsigned {
    #[track_caller]
    fn div_assign(&mut self, rhs: BigUnsigned) {
        *self /= &rhs;
    }
}

impl Rem<&NonZero<BigUnsigned>> for &BigUnsigned {
    type Output = BigUnsigned;

    fn rem(self, rhs: &NonZero<BigUnsigned>) -> BigUnsigned {
        divide(self.clone(), rhs.as_ref()).1
    }
}

impl Rem<&NonZero<BigUnsigned>> for BigUnsigned {
    type Output = BigUnsigned;

    fn rem(self, rhs: &NonZero<BigUnsigned>) -> BigUnsigned {
        divide(self, rhs.as_ref()).1
    }
}

impl Rem<NonZero<BigUnsigned>> for &BigUnsigned {
    type Output = BigUnsigned;

    fn rem(self, rhs: NonZero<BigUnsigned>) -> BigUnsigned {
        self % &rhs
    }
}

impl Rem<NonZero<BigUnsigned>> for BigUnsigned {
    type Output = BigUnsigned;

    fn rem(self, rhs: NonZero<BigUnsigned>) -> BigUnsigned {
        self % &rhs
    }
}

impl Rem<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn rem(self, rhs: &BigUnsigned) -> BigUnsigned {
        divide_or_panic(self.clone(), rhs).1
    }
}

impl Rem<&BigUnsigned> for BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn rem(self, rhs: &BigUnsigned) -> BigUnsigned {
        divide_or_panic(self, rhs).1
    }
}

impl Rem for BigUnsigned {
    type Output = BigUnsigned;

    #[track_caller]
    fn rem(self, rhs: BigUnsigned) -> BigUnsigned {
        divide_or_panic(self, &rhs).1
    }
}

impl RemAssign<&NonZero<BigUnsigned>> for BigUnsigned {
    fn rem_assign(&mut self, rhs: &NonZero<BigUnsigned>) {
        *self = divide(mem::take(self), rhs.as_ref()).1;
    }
}

impl RemAssign<NonZero<BigUnsigned>> for BigUnsigned {
    fn rem_assign(&mut self, rhs: NonZero<BigUnsigned>) {
        *self %= &rhs;
    }
}

impl RemAssign<&BigUnsigned> for BigUnsigned {
    #[track_caller]
    fn rem_assign(&mut self, rhs: &BigUnsigned) {
        *self = divide_or_panic(mem::take(self), rhs).1;
    }
}

impl RemAssign for BigUnsigned {
    #[track_caller]
    fn rem_assign(&mut self, rhs: BigUnsigned) {
        *self %= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUnsigned, Digit, Error, NonZero, Word};

    const HI: Word = 1 << (Digit::BITS - 1);

    fn check(x: &BigUnsigned, y: &BigUnsigned) -> (BigUnsigned, BigUnsigned) {
        let (q, r) = x.div_rem(y).unwrap();
        assert!(r < *y);
        assert_eq!(&(&q * y) + &r, *x);
        (q, r)
    }

    #[test]
    fn small_scenarios() {
        for (x, y, q, r) in [
            (1000u32, 7u32, 142u32, 6u32),
            (0, 5, 0, 0),
            (3, 10, 0, 3),
            (100_000, 300, 333, 100),
        ] {
            let (x, y) = (BigUnsigned::from(x), BigUnsigned::from(y));
            assert_eq!(x.div_rem(&y), Ok((BigUnsigned::from(q), BigUnsigned::from(r))));
        }
    }

    #[test]
    fn div_by_zero() {
        let x = BigUnsigned::from_words([1, 2, 3]);
        let zero = BigUnsigned::from_words([0, 0]);
        assert_eq!(x.div_rem(&zero), Err(Error::DivisionByZero));
        assert_eq!(x.checked_div(&zero), Err(Error::DivisionByZero));
        assert_eq!(x.checked_rem(&zero), Err(Error::DivisionByZero));
        assert_eq!(
            BigUnsigned::zero().div_rem(&BigUnsigned::zero()),
            Err(Error::DivisionByZero)
        );

        let mut y = x.clone();
        assert_eq!(y.checked_div_assign(&zero), Err(Error::DivisionByZero));
        assert_eq!(y.checked_rem_assign(&zero), Err(Error::DivisionByZero));
        assert_eq!(y, x);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_op_by_zero_panics() {
        let _ = BigUnsigned::one() / BigUnsigned::zero();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn rem_assign_op_by_zero_panics() {
        let mut x = BigUnsigned::one();
        x %= &BigUnsigned::zero();
    }

    #[test]
    fn equal_operands() {
        let x = BigUnsigned::from_words([5, 6, 7]);
        assert_eq!(x.div_rem(&x), Ok((BigUnsigned::one(), BigUnsigned::zero())));
    }

    #[test]
    fn smaller_dividend() {
        let x = BigUnsigned::from_words([Digit::MAX.0, Digit::MAX.0]);
        let y = BigUnsigned::from_words([0, 0, 1]);
        assert_eq!(x.div_rem(&y), Ok((BigUnsigned::zero(), x.clone())));

        // same digit count, still smaller
        let y = BigUnsigned::from_words([0, Digit::MAX.0]);
        let x = BigUnsigned::from_words([Digit::MAX.0, Digit::MAX.0 - 1]);
        assert_eq!(x.div_rem(&y), Ok((BigUnsigned::zero(), x.clone())));
    }

    #[test]
    fn overshoot_correction() {
        // The trial quotient of 2^(3W) / (HI, 0, MAX) is 2 but the true quotient is 1.
        let x = BigUnsigned::from_words([0, 0, 0, 1]);
        let y = BigUnsigned::from_words([Word::MAX, 0, HI]);
        assert_eq!(
            check(&x, &y),
            (
                BigUnsigned::one(),
                BigUnsigned::from_words([1, Word::MAX, HI - 1])
            )
        );
    }

    #[test]
    fn normalized_divisor() {
        // The top digit of the divisor already has its high bit set.
        let y = BigUnsigned::from_words([1, HI]);
        let x = BigUnsigned::from_words([7, 0, 0, HI, 3]);
        check(&x, &y);

        let (q, r) = check(&BigUnsigned::from_words([0, 0, 1]), &y);
        assert_eq!(q, BigUnsigned::from(Digit(1)));
        assert_eq!(r, BigUnsigned::from_words([Word::MAX, HI - 1]));
    }

    #[test]
    fn maximal_shift_divisor() {
        // The top digit of the divisor is one, so normalization shifts by `Digit::BITS - 1`.
        let y = BigUnsigned::from_words([0, 1]);
        let x = BigUnsigned::from_words([9, 8, 7, 6]);
        let (q, r) = check(&x, &y);
        assert_eq!(q, BigUnsigned::from_words([8, 7, 6]));
        assert_eq!(r, BigUnsigned::from(9u8));

        let y = BigUnsigned::from_words([Word::MAX, 1]);
        check(&BigUnsigned::from_words([Word::MAX; 5]), &y);
    }

    #[test]
    fn saturated_trial_quotient() {
        // Dividends whose top digit equals the normalized divisor's top digit.
        let y = BigUnsigned::from_words([Word::MAX, HI]);
        check(&BigUnsigned::from_words([0, HI, HI]), &y);
        check(&BigUnsigned::from_words([0, 0, HI]), &y);
        check(&BigUnsigned::from_words([Word::MAX, Word::MAX, HI, HI]), &y);
    }

    #[test]
    fn single_digit_path_agrees() {
        let x = BigUnsigned::from_words([0x1234, Word::MAX, 0x5678, 42]);
        for d in [1, 2, 3, 10, HI - 1, HI, Word::MAX] {
            let (q, r) = x.div_rem(&BigUnsigned::from(Digit(d))).unwrap();
            let (q_digit, r_digit) = x.div_rem_digit(Digit(d)).unwrap();
            assert_eq!(q, q_digit);
            assert_eq!(r, BigUnsigned::from(r_digit));
        }
    }

    #[test]
    fn identity() {
        let x = BigUnsigned::from_words([3, 1, 4, 1, 5]);
        assert_eq!(x.div_rem(&BigUnsigned::one()), Ok((x.clone(), BigUnsigned::zero())));
        assert_eq!(&x / &BigUnsigned::one(), x);
        assert!((&x % &BigUnsigned::one()).is_zero());
    }

    #[test]
    fn operators_agree() {
        let x = BigUnsigned::from_words([11, 22, 33, 44]);
        let y = BigUnsigned::from_words([5, 6]);
        let nz = NonZero::new(y.clone()).unwrap();
        let (q, r) = check(&x, &y);

        assert_eq!(&x / &y, q);
        assert_eq!(&x % &y, r);
        assert_eq!(&x / &nz, q);
        assert_eq!(&x % &nz, r);
        assert_eq!(x.clone() / y.clone(), q);
        assert_eq!(x.clone() % nz.clone(), r);
        assert_eq!(x.checked_div(&y), Ok(q.clone()));
        assert_eq!(x.checked_rem(&y), Ok(r.clone()));
        assert_eq!(x.div_rem_nz(&nz), (q.clone(), r.clone()));

        let mut a = x.clone();
        a /= &nz;
        assert_eq!(a, q);

        let mut a = x.clone();
        a %= y.clone();
        assert_eq!(a, r);

        let mut a = x.clone();
        a.checked_div_assign(&y).unwrap();
        assert_eq!(a, q);

        let mut a = x.clone();
        a.checked_rem_assign(&y).unwrap();
        assert_eq!(a, r);
    }

    #[test]
    fn num_traits_checked() {
        use num_traits::{CheckedDiv, CheckedRem};

        let x = BigUnsigned::from(1000u32);
        assert_eq!(
            CheckedDiv::checked_div(&x, &BigUnsigned::from(7u8)),
            Some(BigUnsigned::from(142u8))
        );
        assert_eq!(
            CheckedRem::checked_rem(&x, &BigUnsigned::from(7u8)),
            Some(BigUnsigned::from(6u8))
        );
        assert_eq!(CheckedDiv::checked_div(&x, &BigUnsigned::zero()), None);
        assert_eq!(CheckedRem::checked_rem(&x, &BigUnsigned::zero()), None);
    }
}
