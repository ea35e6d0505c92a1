//! Wrapper type for non-zero integers.

use crate::{BigUnsigned, Digit};
use core::{
    fmt,
    num::{NonZeroU8, NonZeroU16, NonZeroU32},
    ops::Deref,
};
use num_traits::Zero;
use subtle::{Choice, ConstantTimeEq, CtOption};

#[cfg(target_pointer_width = "64")]
use core::num::NonZeroU64;

#[cfg(feature = "serde")]
use serdect::serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Unexpected},
};

/// Wrapper type for non-zero integers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Create a new non-zero integer.
    pub fn new(n: T) -> CtOption<Self>
    where
        T: Zero,
    {
        let is_nonzero = Choice::from(!n.is_zero() as u8);
        CtOption::new(Self(n), is_nonzero)
    }

    /// Provides access to the contents of `NonZero` in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl NonZero<Digit> {
    /// Creates a new non-zero digit in a const context.
    /// Panics if the value is zero.
    pub const fn new_unwrap(n: Digit) -> Self {
        if n.is_zero_vartime() {
            panic!("Invalid value: zero")
        } else {
            Self(n)
        }
    }

    /// Create a [`NonZero<Digit>`] from a [`NonZeroU8`] (const-friendly)
    pub const fn from_u8(n: NonZeroU8) -> Self {
        Self(Digit::from_u8(n.get()))
    }

    /// Create a [`NonZero<Digit>`] from a [`NonZeroU16`] (const-friendly)
    pub const fn from_u16(n: NonZeroU16) -> Self {
        Self(Digit::from_u16(n.get()))
    }

    /// Create a [`NonZero<Digit>`] from a [`NonZeroU32`] (const-friendly)
    pub const fn from_u32(n: NonZeroU32) -> Self {
        Self(Digit::from_u32(n.get()))
    }

    /// Create a [`NonZero<Digit>`] from a [`NonZeroU64`] (const-friendly)
    #[cfg(target_pointer_width = "64")]
    pub const fn from_u64(n: NonZeroU64) -> Self {
        Self(Digit::from_u64(n.get()))
    }
}

impl NonZero<BigUnsigned> {
    /// Borrow the digits of the wrapped value, which always contain at least one digit.
    pub fn as_digits(&self) -> &[Digit] {
        self.0.as_digits()
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> ConstantTimeEq for NonZero<T>
where
    T: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl From<NonZeroU8> for NonZero<Digit> {
    fn from(integer: NonZeroU8) -> Self {
        Self::from_u8(integer)
    }
}

impl From<NonZeroU16> for NonZero<Digit> {
    fn from(integer: NonZeroU16) -> Self {
        Self::from_u16(integer)
    }
}

impl From<NonZeroU32> for NonZero<Digit> {
    fn from(integer: NonZeroU32) -> Self {
        Self::from_u32(integer)
    }
}

#[cfg(target_pointer_width = "64")]
impl From<NonZeroU64> for NonZero<Digit> {
    fn from(integer: NonZeroU64) -> Self {
        Self::from_u64(integer)
    }
}

impl From<NonZero<Digit>> for NonZero<BigUnsigned> {
    fn from(digit: NonZero<Digit>) -> Self {
        Self(BigUnsigned::from(digit.0))
    }
}

impl<T> fmt::Display for NonZero<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> fmt::LowerHex for NonZero<T>
where
    T: fmt::LowerHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T> fmt::UpperHex for NonZero<T>
where
    T: fmt::UpperHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Zero> Deserialize<'de> for NonZero<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: T = T::deserialize(deserializer)?;

        if value.is_zero() {
            Err(D::Error::invalid_value(
                Unexpected::Other("zero"),
                &"a non-zero value",
            ))
        } else {
            Ok(Self(value))
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize + Zero> Serialize for NonZero<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize + Zero> zeroize::Zeroize for NonZero<T> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}


#[cfg(all(test, feature = "serde"))]
mod tests_serde {
    use crate::{BigUnsigned, NonZero};

    #[test]
    fn serde() {
        let config = bincode::config::standard();
        let test = NonZero::new(BigUnsigned::from(0x0011223344556677u64)).unwrap();

        let serialized = bincode::serde::encode_to_vec(&test, config).unwrap();
        let (deserialized, _): (NonZero<BigUnsigned>, usize) =
            bincode::serde::decode_from_slice(&serialized, config).unwrap();
        assert_eq!(test, deserialized);

        let serialized = bincode::serde::encode_to_vec(BigUnsigned::zero(), config).unwrap();
        assert!(
            bincode::serde::decode_from_slice::<NonZero<BigUnsigned>, _>(&serialized, config)
                .is_err()
        );
    }
}
