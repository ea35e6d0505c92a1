//! Pure Rust implementation of arbitrary-precision unsigned integers, built around an exact
//! long division engine.
//!
//! # About
//! [`BigUnsigned`] stores a non-negative integer of any size as a canonically trimmed,
//! little-endian sequence of machine-word [`Digit`]s. All arithmetic is exact: values grow as
//! needed and never wrap.
//!
//! Division is the centerpiece. Divisors of a single digit use schoolbook division, and larger
//! divisors use Knuth's Algorithm D with a 3-by-2 digit trial quotient, which is at most one too
//! large and corrected by comparing the trial product against the running remainder.
//!
//! # Minimum Supported Rust Version
//! **Rust 1.85** at a minimum.
//!
//! # Goals
//! - `no_std`-friendly: only the `alloc` crate is required.
//! - Division never produces a silently wrong result, and division by zero is always reported
//!   as [`Error::DivisionByZero`] by the checked operations.
//! - Integration with the [`num-traits`][`num_traits`] ecosystem.
//!
//! # Usage
//! ```
//! use big_unsigned::{BigUnsigned, Error, NonZero};
//!
//! let x: BigUnsigned = "340282366920938463463374607431768211457".parse().unwrap();
//! let y = BigUnsigned::from(0x1_0000_0000_0000_0001u128);
//!
//! let (q, r) = x.div_rem(&y).unwrap();
//! assert_eq!(&(&q * &y) + &r, x);
//! assert!(r < y);
//!
//! // division by a value known to be non-zero is infallible
//! let nz = NonZero::new(y).unwrap();
//! assert_eq!(&x / &nz, q);
//! assert_eq!(&x % &nz, r);
//!
//! assert_eq!(x.div_rem(&BigUnsigned::zero()), Err(Error::DivisionByZero));
//! ```
//!
//! ## Radix conversion
//! ```
//! use big_unsigned::BigUnsigned;
//!
//! let n = BigUnsigned::from_str_radix("ffff_ffff_ffff_ffff_ffff", 16).unwrap();
//! assert_eq!(n.to_string(), "1208925819614629174706175");
//! assert_eq!(n.to_str_radix(36), "5gv2rma270x9hhj3");
//! ```
//!
//! ## Random number generation
//!
//! When the `rand` feature is enabled, [`BigUnsigned::random_bits`] and
//! [`BigUnsigned::random_digits`] generate random values from any [`rand_core::RngCore`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod digit;
mod error;
mod non_zero;
mod primitives;
mod radix;
mod unsigned;
mod word;

pub use crate::{
    digit::Digit,
    error::Error,
    non_zero::NonZero,
    radix::ParseRadixError,
    unsigned::BigUnsigned,
    word::{WideWord, Word},
};
pub use num_traits;
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
