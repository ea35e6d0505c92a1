use crate::{BigUnsigned, Digit};

impl BigUnsigned {
    /// Calculate the number of bits needed to represent this number, i.e. the index of the
    /// highest set bit plus one. Zero needs no bits.
    pub fn bits(&self) -> u32 {
        match self.digits.last() {
            None => 0,
            Some(top) => (self.ndigits() as u32 - 1) * Digit::BITS + top.bits(),
        }
    }

    /// Calculate the number of leading zeros in the most significant digit.
    ///
    /// This is the shift which normalizes the value so that its top digit has its high bit set.
    /// Zero reports [`Digit::BITS`].
    pub fn leading_zeros(&self) -> u32 {
        self.digits
            .last()
            .map_or(Digit::BITS, |top| top.leading_zeros())
    }

    /// Get the value of the bit at position `index`, as a truthy or falsy boolean.
    pub fn bit_vartime(&self, index: u32) -> bool {
        let digit = self.digit((index / Digit::BITS) as usize);
        (digit.0 >> (index % Digit::BITS)) & 1 == 1
    }
}
