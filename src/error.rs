//! Error types.

use core::fmt;

/// Errors returned by fallible arithmetic on [`Digit`][`crate::Digit`] and
/// [`BigUnsigned`][`crate::BigUnsigned`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The divisor was zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl core::error::Error for Error {}
