//! Parsing a [`Nat`] from text.
//!
//! [`parse_digits`] only covers pure base-10 digit strings, the fast path
//! `decimal-float`'s number parser needs for a mantissa. [`parse_radix_digits`]
//! covers the general `2..=62` case for `decimal-float`'s `Parse(s, base)`
//! (spec.md §4.3.9); base prefixes (`0x`, `0o`, `0b`), underscore separators,
//! and base-0 auto-detection are still `decimal-float`'s job — its text
//! format allows an exponent and sign the integer parser here doesn't — see
//! `decimal_base::ParseError` for the shared error type.

use crate::mul_ops::mul_word;
use crate::repr::Nat;
use crate::word::{Word, DECIMAL_BASE, DIGITS_PER_WORD};
use decimal_base::ParseError;

/// Parse a string of ASCII decimal digits (`0`-`9`, at least one) into a
/// [`Nat`]. No sign, no separators, no leading `0x`-style prefix.
pub fn parse_digits(s: &str) -> Result<Nat, ParseError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::NoDigits);
    }
    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit);
        }
    }
    // Accumulate DIGITS_PER_WORD digits at a time via grouped multiply-add,
    // the same chunking `dashu_int`'s radix-10 parser uses.
    let mut n = Nat::ZERO;
    let mut chunk_start = bytes.len() % DIGITS_PER_WORD as usize;
    if chunk_start != 0 {
        let chunk: Word = parse_chunk(&bytes[..chunk_start]);
        n = Nat::from_word(chunk);
    }
    while chunk_start < bytes.len() {
        let chunk: Word = parse_chunk(&bytes[chunk_start..chunk_start + DIGITS_PER_WORD as usize]);
        n = mul_word(&n, DECIMAL_BASE);
        n = crate::add_ops::add(&n, &Nat::from_word(chunk));
        chunk_start += DIGITS_PER_WORD as usize;
    }
    Ok(n)
}

fn parse_chunk(bytes: &[u8]) -> Word {
    let mut v: Word = 0;
    for &b in bytes {
        v = v * 10 + (b - b'0') as Word;
    }
    v
}

/// Map an ASCII digit character to its value, matching the digit alphabet
/// `crate::fmt::to_radix_string` formats with: `0-9`, then `a-z`, then `A-Z`.
fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'z' => Some((b - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 36),
        _ => None,
    }
}

/// Parse a string of digits in the given `radix` (`2..=62`) into a [`Nat`].
/// No sign, no separators, no prefix — callers strip those first.
pub fn parse_radix_digits(s: &str, radix: u32) -> Result<Nat, ParseError> {
    if !(2..=62).contains(&radix) {
        return Err(ParseError::UnsupportedRadix);
    }
    if radix == 10 {
        return parse_digits(s);
    }
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::NoDigits);
    }
    let mut n = Nat::ZERO;
    for &b in bytes {
        let d = digit_value(b).ok_or(ParseError::InvalidDigit)?;
        if d >= radix {
            return Err(ParseError::InvalidDigit);
        }
        n = mul_word(&n, radix as Word);
        n = crate::add_ops::add(&n, &Nat::from_word(d as Word));
    }
    Ok(n)
}
