use crate::{
    WideWord, Word,
    word::{join, split},
};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0 or 1).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let ret = (lhs as WideWord) + (rhs as WideWord) + (carry as WideWord);
    split(ret)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new borrow (0 or 1).
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow);
    (ret, (b1 | b2) as Word)
}

/// Computes `lhs * rhs`, returning the low and the high words of the result.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: Word, rhs: Word) -> (Word, Word) {
    split((lhs as WideWord) * (rhs as WideWord))
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    let lhs = lhs as WideWord;
    let rhs = rhs as WideWord;
    let addend = addend as WideWord;
    let carry = carry as WideWord;

    // Cannot overflow:
    // lhs      * rhs      + addend   + carry
    // (2^64-1) * (2^64-1) + (2^64-1) + (2^64-1) =
    // 2^128 - 2^65 + 1 + 2^64 - 1 + 2^64 - 1 =
    // 2^128 - 2^65 + 2*2^64 - 1 =
    // 2^128 - 1 = u128::MAX
    split(((lhs * rhs) + addend) + carry)
}

/// Divides the double word `(hi, lo)` by `rhs`, returning the quotient and remainder.
///
/// The quotient only fits in a single word when `hi < rhs`.
#[inline(always)]
#[allow(clippy::integer_division_remainder_used)]
pub(crate) const fn div_wide(hi: Word, lo: Word, rhs: Word) -> (Word, Word) {
    debug_assert!(hi < rhs);
    let num = join(lo, hi);
    let rhs = rhs as WideWord;
    ((num / rhs) as Word, (num % rhs) as Word)
}
