//! Text formatting of a [`Nat`] (spec.md §4.3.9, the integer-valued slice of it).
//!
//! Base 10 is formatted directly from the word representation (each non-top
//! word is exactly `DIGITS_PER_WORD` digits, zero-padded). Other bases (2-62,
//! matching the radix range `decimal-float`'s text format accepts) go through
//! repeated division, the same approach `dashu_int`'s `fmt` module uses for
//! bases that aren't a power of its own word radix.

use crate::div_ops::div_word;
use crate::repr::Nat;
use crate::word::{Word, DIGITS_PER_WORD};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

const DIGIT_CHARS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Write `x` in base 10, with no leading zeros (`"0"` for zero).
pub fn write_base10(f: &mut fmt::Formatter<'_>, x: &Nat) -> fmt::Result {
    let words = x.words();
    if words.is_empty() {
        return f.write_str("0");
    }
    write!(f, "{}", words[words.len() - 1])?;
    for &w in words[..words.len() - 1].iter().rev() {
        write!(f, "{:0width$}", w, width = DIGITS_PER_WORD as usize)?;
    }
    Ok(())
}

/// Render `x` as a string of digits in the given base (`2..=62`), most
/// significant digit first, with no leading zeros (`"0"` for zero).
///
/// Digits above 9 use lowercase then uppercase letters, matching the digit
/// alphabet spec.md's parser accepts in the other direction.
pub fn to_radix_string(x: &Nat, radix: u32) -> String {
    debug_assert!((2..=62).contains(&radix));
    if x.is_zero() {
        return String::from("0");
    }
    let mut n = x.clone();
    let mut digits: Vec<u8> = Vec::new();
    while !n.is_zero() {
        let (q, r) = div_word(&n, radix as Word);
        digits.push(DIGIT_CHARS[r as usize]);
        n = q;
    }
    digits.reverse();
    // SAFETY-free: `DIGIT_CHARS` is ASCII.
    String::from_utf8(digits).expect("digit alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_base10() {
        let x = Nat::from_word(12345);
        assert_eq!(alloc::format!("{}", x), "12345");
        assert_eq!(alloc::format!("{}", Nat::ZERO), "0");
    }

    #[test]
    fn test_display_multiword() {
        use crate::word::DECIMAL_BASE;
        let x = Nat::from_words(alloc::vec![7, 3]);
        let expected = alloc::format!("3{:0width$}", 7, width = DIGITS_PER_WORD as usize);
        assert_eq!(alloc::format!("{}", x), expected);
        let _ = DECIMAL_BASE;
    }

    #[test]
    fn test_to_radix_hex() {
        let x = Nat::from_word(255);
        assert_eq!(to_radix_string(&x, 16), "ff");
    }

    #[test]
    fn test_to_radix_base62_roundtrip() {
        let x = Nat::from_word(123456789);
        let s = to_radix_string(&x, 36);
        let back = u64::from_str_radix(&s, 36).unwrap();
        assert_eq!(back, 123456789);
    }
}
