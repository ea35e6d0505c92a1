//! `Word` represents the core integer type we use as the core of `Digit`, and is typically the same
//! size as a pointer on a particular CPU.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Inner integer type that the [`Digit`][`crate::Digit`] newtype wraps.
    pub type Word = u32;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u64;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Inner integer type that the [`Digit`][`crate::Digit`] newtype wraps.
    pub type Word = u64;

    /// Wide integer type: double the width of [`Word`].
    pub type WideWord = u128;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;

/// Joins a `(lo, hi)` pair of words into a [`WideWord`].
#[inline(always)]
pub(crate) const fn join(lo: Word, hi: Word) -> WideWord {
    ((hi as WideWord) << Word::BITS) | (lo as WideWord)
}

/// Splits a [`WideWord`] into its `(lo, hi)` words.
#[inline(always)]
pub(crate) const fn split(wide: WideWord) -> (Word, Word) {
    (wide as Word, (wide >> Word::BITS) as Word)
}
