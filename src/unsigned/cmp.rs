//! [`BigUnsigned`] comparisons.
//!
//! Magnitude comparisons run in variable time: the canonical representation already reveals
//! the digit count of each operand.

use super::BigUnsigned;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl BigUnsigned {
    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    #[must_use]
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        self.ndigits().cmp(&rhs.ndigits()).then_with(|| {
            for (a, b) in self.digits.iter().zip(&rhs.digits).rev() {
                match a.cmp_vartime(b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }

    /// Compares the digit window `[offset, offset + len)` of `self` against `other`.
    ///
    /// Positions of the window past the top of `self` read as zero, so the window is treated
    /// as a `len`-digit number which is zero-extended as needed. `other` may have at most `len`
    /// digits.
    #[must_use]
    pub fn cmp_window(&self, offset: usize, len: usize, other: &Self) -> Ordering {
        debug_assert!(other.ndigits() <= len);

        for i in (0..len).rev() {
            match self.digit(offset + i).cmp_vartime(&other.digit(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl ConstantTimeEq for BigUnsigned {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.ndigits() != other.ndigits() {
            return Choice::from(0);
        }

        self.digits.as_slice().ct_eq(other.digits.as_slice())
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
