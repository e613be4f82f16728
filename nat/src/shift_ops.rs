//! Shifting a [`Nat`] by a count of decimal digits (spec.md §4.2).

use crate::buffer::Buffer;
use crate::repr::Nat;
use crate::word::{shl_vu, shr_vu, Word, DIGITS_PER_WORD};

/// `x * 10^n`.
pub fn shl(x: &Nat, n: u32) -> Nat {
    if x.is_zero() || n == 0 {
        return x.clone();
    }
    let word_shift = (n / DIGITS_PER_WORD) as usize;
    let digit_shift = n % DIGITS_PER_WORD;

    let mut buf: Buffer = alloc::vec![0; word_shift + x.word_len() + 1];
    let mut shifted: Buffer = alloc::vec![0; x.word_len()];
    let carry = shl_vu(&mut shifted, x.words(), digit_shift);
    buf[word_shift..word_shift + x.word_len()].copy_from_slice(&shifted);
    if carry != 0 {
        buf[word_shift + x.word_len()] = carry;
    }
    Nat::from_words(buf)
}

/// `x / 10^n`, truncating. Returns the quotient and a flag that is `true` iff
/// any nonzero digit was shifted out (the sticky bit used by rounding).
pub fn shr(x: &Nat, n: u32) -> (Nat, bool) {
    if n == 0 || x.is_zero() {
        return (x.clone(), false);
    }
    let word_shift = (n / DIGITS_PER_WORD) as usize;
    let digit_shift = n % DIGITS_PER_WORD;

    if word_shift >= x.word_len() {
        return (Nat::ZERO, !x.is_zero());
    }

    let mut sticky = x.words()[..word_shift].iter().any(|&w| w != 0);
    let remaining = &x.words()[word_shift..];
    let mut buf: Buffer = alloc::vec![0; remaining.len()];

    if digit_shift != 0 {
        let discarded: Word = shr_vu(&mut buf, remaining, digit_shift);
        sticky |= discarded != 0;
    } else {
        buf.copy_from_slice(remaining);
    }
    (Nat::from_words(buf), sticky)
}

/// `x / 10^n`, truncating, discarding the sticky bit. Convenience wrapper
/// around [`shr`] for callers that only need the quotient.
#[inline]
pub fn shr_trunc(x: &Nat, n: u32) -> Nat {
    shr(x, n).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shl_basic() {
        let x = Nat::from_word(123);
        assert_eq!(shl(&x, 3), Nat::from_word(123_000));
    }

    #[test]
    fn test_shr_basic() {
        let x = Nat::from_word(123_456);
        let (q, sticky) = shr(&x, 3);
        assert_eq!(q, Nat::from_word(123));
        assert!(sticky);
    }

    #[test]
    fn test_shr_exact() {
        let x = Nat::from_word(123_000);
        let (q, sticky) = shr(&x, 3);
        assert_eq!(q, Nat::from_word(123));
        assert!(!sticky);
    }

    #[test]
    fn test_shl_shr_roundtrip() {
        let x = Nat::from_word(987654321);
        let shifted = shl(&x, 5);
        let (back, sticky) = shr(&shifted, 5);
        assert_eq!(back, x);
        assert!(!sticky);
    }

    #[test]
    fn test_shr_past_top() {
        let x = Nat::from_word(5);
        let (q, sticky) = shr(&x, 50);
        assert_eq!(q, Nat::ZERO);
        assert!(sticky);
    }

    #[test]
    fn test_shr_zero() {
        assert_eq!(shr(&Nat::ZERO, 10), (Nat::ZERO, false));
    }
}
