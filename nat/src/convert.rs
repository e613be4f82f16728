//! Conversion between [`Nat`] and machine integers, and (behind
//! `bigint-interop`) `dashu_int::UBig`.

use crate::div_ops::div_word;
use crate::mul_ops::mul_word;
use crate::repr::Nat;
use crate::word::{Word, DECIMAL_BASE};
use decimal_base::ConversionError;

impl Nat {
    /// Convert to `u64`, failing if the value doesn't fit.
    pub fn to_u64(&self) -> Result<u64, ConversionError> {
        let mut acc: u128 = 0;
        for &w in self.words().iter().rev() {
            acc = acc
                .checked_mul(DECIMAL_BASE as u128)
                .and_then(|a| a.checked_add(w as u128))
                .ok_or(ConversionError::OutOfBounds)?;
        }
        u64::try_from(acc).map_err(|_| ConversionError::OutOfBounds)
    }

    /// Build from a `u64`.
    pub fn from_u64(mut v: u64) -> Self {
        if v == 0 {
            return Nat::ZERO;
        }
        let mut n = Nat::ZERO;
        let mut place = Nat::from_word(1);
        while v != 0 {
            let digit = (v % DECIMAL_BASE as u64) as Word;
            n = crate::add_ops::add(&n, &mul_word(&place, digit));
            place = mul_word(&place, DECIMAL_BASE);
            v /= DECIMAL_BASE as u64;
        }
        n
    }
}

#[cfg(feature = "bigint-interop")]
mod bigint_interop {
    use super::*;
    use dashu_int::UBig;

    impl Nat {
        /// Convert to a binary-radix `dashu_int::UBig`, the interop type
        /// spec.md's conversion surface (§4.3.8) calls out for moving a
        /// mantissa into the broader binary-bignum ecosystem.
        pub fn to_ubig(&self) -> UBig {
            let mut acc = UBig::from(0u8);
            let base = UBig::from(DECIMAL_BASE);
            for &w in self.words().iter().rev() {
                acc = acc * &base + UBig::from(w);
            }
            acc
        }

        /// Build a `Nat` from a `UBig` by repeated division by the radix `B`.
        pub fn from_ubig(mut v: UBig) -> Self {
            if v == UBig::from(0u8) {
                return Nat::ZERO;
            }
            let base = UBig::from(DECIMAL_BASE);
            let mut words = alloc::vec::Vec::new();
            while v > UBig::from(0u8) {
                let (q, r) = v.div_rem(&base);
                let digit: u64 = r.try_into().expect("remainder mod B fits in a word");
                words.push(digit as Word);
                v = q;
            }
            Nat::from_words(words)
        }
    }
}

/// Divide by the radix `B`, exposed for `decimal-float`'s digit-at-a-time
/// mantissa walk.
pub fn div_base(x: &Nat) -> (Nat, Word) {
    div_word(x, DECIMAL_BASE)
}
