//! Digit comparisons

use super::Digit;
use core::cmp::Ordering;
use subtle::ConstantTimeEq;

impl Digit {
    /// Perform a comparison of the inner value in variable-time.
    #[inline]
    #[must_use]
    pub const fn cmp_vartime(&self, other: &Self) -> Ordering {
        if self.0 < other.0 {
            Ordering::Less
        } else if self.0 > other.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Performs an equality check in variable-time.
    #[inline]
    #[must_use]
    pub const fn eq_vartime(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Digit {}

impl PartialEq for Digit {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for Digit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for Digit {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
