//! Digit division, including the double-word primitives used by long division.

use crate::{Digit, Error, NonZero, primitives::div_wide};
use core::ops::{Div, Rem};

impl Digit {
    /// Divides the double digit `(hi, lo)` by `rhs`, returning the quotient and remainder.
    ///
    /// The quotient fits in a single digit only when `hi < rhs`, which the caller must ensure.
    #[inline(always)]
    #[must_use]
    pub const fn div_wide(hi: Digit, lo: Digit, rhs: Digit) -> (Digit, Digit) {
        let (q, r) = div_wide(hi.0, lo.0, rhs.0);
        (Digit(q), Digit(r))
    }

    /// Approximates the quotient of the triple digit `(x2, x1, x0)` by the double digit
    /// `(y1, y0)`.
    ///
    /// `y1` must be normalized, i.e. have its high bit set, and `(x2, x1, x0)` must be less
    /// than `(y1, y0) << Digit::BITS`, which long division guarantees for every window of its
    /// running remainder. The result is then either the exact quotient of the full window the
    /// triple was read from, or one more than it.
    ///
    /// See Knuth, TAOCP vol 2, section 4.3.1, and "Improved Division by Invariant Integers" by
    /// Niels Möller and Torbjorn Granlund.
    #[must_use]
    pub const fn div3by2(x: (Digit, Digit, Digit), y: (Digit, Digit)) -> Digit {
        let ((x2, x1, x0), (y1, y0)) = (x, y);
        debug_assert!(y1.is_normalized());
        debug_assert!(x2.0 <= y1.0);

        // Estimate the quotient from the top two words of the dividend and the top word of the
        // divisor. If `x2 == y1` the true 2/1 quotient is at least `2^W`, so saturate it.
        let (mut q, mut r) = if x2.0 == y1.0 {
            // `r = (x2, x1) - MAX * y1 = x1 + y1 = x1 + x2`
            let (r, overflow) = x1.overflowing_add(x2);
            if overflow {
                // `r >= 2^W` so `q * y0 < (r, x0)`: no refinement can lower the estimate.
                return Digit::MAX;
            }
            (Digit::MAX, r)
        } else {
            Digit::div_wide(x2, x1, y1)
        };

        // Refine against `y0`. The normalized divisor bounds the overshoot of `q` by 2.
        let (mut lo, mut hi) = q.widening_mul(y0);
        while hi.0 > r.0 || (hi.0 == r.0 && lo.0 > x0.0) {
            q = q.wrapping_sub(Digit::ONE);

            let overflow;
            (r, overflow) = r.overflowing_add(y1);
            if overflow {
                break;
            }

            // `(q - 1) * y0 = q * y0 - y0`
            let borrow;
            (lo, borrow) = lo.borrowing_sub(y0, Digit::ZERO);
            (hi, _) = hi.borrowing_sub(Digit::ZERO, borrow);
        }

        q
    }

    /// Computes `self / rhs`, returning the quotient and remainder.
    #[inline]
    #[must_use]
    pub fn div_rem(self, rhs: NonZero<Self>) -> (Digit, Digit) {
        Digit::div_wide(Digit::ZERO, self, rhs.get())
    }

    /// Computes `self / rhs`, returning [`Error::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Result<Digit, Error> {
        if rhs.is_zero_vartime() {
            return Err(Error::DivisionByZero);
        }

        Ok(Digit::div_wide(Digit::ZERO, self, rhs).0)
    }

    /// Computes `self % rhs`, returning [`Error::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Result<Digit, Error> {
        if rhs.is_zero_vartime() {
            return Err(Error::DivisionByZero);
        }

        Ok(Digit::div_wide(Digit::ZERO, self, rhs).1)
    }
}

impl Div<NonZero<Digit>> for Digit {
    type Output = Digit;

    #[inline]
    fn div(self, rhs: NonZero<Digit>) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem<NonZero<Digit>> for Digit {
    type Output = Digit;

    #[inline]
    fn rem(self, rhs: NonZero<Digit>) -> Self {
        self.div_rem(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use crate::{Digit, Error, NonZero};

    const HI: Digit = Digit(1 << Digit::HI_BIT);

    #[test]
    fn div_rem_ok() {
        let n = Digit::from_u32(0xffff_ffff);
        let d = NonZero::new(Digit::from_u32(0xfffe)).unwrap();
        assert_eq!(n.div_rem(d), (Digit::from_u32(0x10002), Digit::from_u32(0x3)));
    }

    #[test]
    fn checked_div() {
        assert_eq!(Digit(1000).checked_div(Digit(7)), Ok(Digit(142)));
        assert_eq!(Digit(1000).checked_rem(Digit(7)), Ok(Digit(6)));
        assert_eq!(
            Digit::MAX.checked_div(Digit::ZERO),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            Digit::MAX.checked_rem(Digit::ZERO),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn div_wide() {
        // (d - 1) * 2^W + MAX = MAX * d + (d - 1)
        let d = Digit::MAX;
        assert_eq!(
            Digit::div_wide(Digit(d.0 - 1), Digit::MAX, d),
            (Digit::MAX, Digit(d.0 - 1))
        );
    }

    #[test]
    fn div3by2_exact() {
        // (1, 0, 0) / (HI, 0) = 2^(2W) / 2^(2W - 1) = 2
        assert_eq!(
            Digit::div3by2((Digit::ONE, Digit::ZERO, Digit::ZERO), (HI, Digit::ZERO)),
            Digit(2)
        );
    }

    #[test]
    fn div3by2_saturated_early_return() {
        // x2 == y1 and x1 + x2 overflows: the saturated estimate is final and exact.
        assert_eq!(
            Digit::div3by2((HI, HI, Digit::ZERO), (HI, Digit::MAX)),
            Digit::MAX
        );
    }

    #[test]
    fn div3by2_saturated_then_refined() {
        // x2 == y1 and x1 + x2 fits, so MAX is refined against the low divisor word until
        // adding y1 to the partial remainder overflows.
        assert_eq!(
            Digit::div3by2((HI, Digit::ZERO, Digit::ZERO), (HI, Digit::MAX)),
            Digit(Digit::MAX.0 - 1)
        );
    }

    #[test]
    fn div3by2_refinement_decrements() {
        // The 2/1 estimate of (HI - 1, MAX) / HI is MAX, but the full quotient of
        // (HI - 1, MAX, 0) / (HI, MAX) is MAX - 1.
        assert_eq!(
            Digit::div3by2(
                (Digit(HI.0 - 1), Digit::MAX, Digit::ZERO),
                (HI, Digit::MAX)
            ),
            Digit(Digit::MAX.0 - 1)
        );
    }

    #[test]
    fn div3by2_small() {
        // (0, 1, 0) / (HI, 0) = 0
        assert_eq!(
            Digit::div3by2((Digit::ZERO, Digit::ONE, Digit::ZERO), (HI, Digit::ZERO)),
            Digit::ZERO
        );
    }
}
