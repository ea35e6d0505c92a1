//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use big_unsigned::{BigUnsigned, Digit};
use num_bigint::BigUint;

/// `BigUnsigned` (or a digit slice) to `num_bigint::BigUint`
pub fn to_biguint<T>(uint: &T) -> BigUint
where
    T: AsRef<[Digit]>,
{
    let mut bytes = Vec::with_capacity(uint.as_ref().len() * Digit::BYTES);

    for digit in uint.as_ref() {
        bytes.extend_from_slice(&digit.0.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to `BigUnsigned`
pub fn to_big_unsigned(big_uint: &BigUint) -> BigUnsigned {
    BigUnsigned::from_le_slice(&big_uint.to_bytes_le())
}
