//! Multiplication of naturals: schoolbook for small operands, Karatsuba above
//! a length threshold (spec.md §4.2, §9).

use crate::add_ops::add as nat_add;
use crate::buffer::Buffer;
use crate::repr::Nat;
use crate::shift_ops::shl;
use crate::word::{add_mul_vvw, mul_add_vww};

/// Below this many words on the shorter operand, schoolbook multiplication
/// wins: Karatsuba's constant-factor overhead isn't paid back yet.
pub const KARATSUBA_THRESHOLD: usize = 40;

pub fn mul(x: &Nat, y: &Nat) -> Nat {
    if x.is_zero() || y.is_zero() {
        return Nat::ZERO;
    }
    if x.word_len().min(y.word_len()) < KARATSUBA_THRESHOLD {
        schoolbook(x, y)
    } else {
        karatsuba(x, y)
    }
}

fn schoolbook(x: &Nat, y: &Nat) -> Nat {
    let (x, y) = if x.word_len() >= y.word_len() {
        (x, y)
    } else {
        (y, x)
    };
    let mut buf: Buffer = alloc::vec![0; x.word_len() + y.word_len()];
    for (i, &yi) in y.words().iter().enumerate() {
        if yi == 0 {
            continue;
        }
        let carry = add_mul_vvw(&mut buf[i..i + x.word_len()], x.words(), yi);
        buf[i + x.word_len()] += carry;
    }
    Nat::from_words(buf)
}

/// Schoolbook multiply-by-one-word, exposed for callers (e.g. `div_ops`,
/// `fmt`) that only need a `Nat * Word` product without the dispatch above.
pub fn mul_word(x: &Nat, y: crate::word::Word) -> Nat {
    if x.is_zero() || y == 0 {
        return Nat::ZERO;
    }
    let mut buf: Buffer = alloc::vec![0; x.word_len() + 1];
    let carry = mul_add_vww(&mut buf[..x.word_len()], x.words(), y, 0);
    buf[x.word_len()] = carry;
    Nat::from_words(buf)
}

/// Split `x` at word position `mid`: `x = hi * B^mid + lo`.
fn split(x: &Nat, mid: usize) -> (Nat, Nat) {
    let words = x.words();
    if words.len() <= mid {
        return (Nat::ZERO, x.clone());
    }
    let lo = Nat::from_words(words[..mid].to_vec());
    let hi = Nat::from_words(words[mid..].to_vec());
    (hi, lo)
}

/// `z * B^(shift * DIGITS_PER_WORD)`, i.e. shift left by whole words (used to
/// place Karatsuba's partial products instead of the digit-granularity
/// [`shl`] — equivalent but avoids paying for the sub-word decomposition).
fn shift_words(x: &Nat, shift: usize) -> Nat {
    if x.is_zero() || shift == 0 {
        return x.clone();
    }
    let mut buf: Buffer = alloc::vec![0; shift];
    buf.extend_from_slice(x.words());
    Nat::from_words(buf)
}

fn karatsuba(x: &Nat, y: &Nat) -> Nat {
    let n = x.word_len().max(y.word_len());
    let mid = n / 2;

    let (x1, x0) = split(x, mid);
    let (y1, y0) = split(y, mid);

    let z0 = mul(&x0, &y0);
    let z2 = mul(&x1, &y1);
    let x_sum = nat_add(&x0, &x1);
    let y_sum = nat_add(&y0, &y1);
    let z1_full = mul(&x_sum, &y_sum);
    // z1 = z1_full - z0 - z2; computed via z1_full - (z0 + z2) to need only
    // one subtraction, mirroring the three-multiplication Karatsuba formula.
    let z0_plus_z2 = nat_add(&z0, &z2);
    let z1 = crate::add_ops::sub(&z1_full, &z0_plus_z2);

    let term0 = z0;
    let term1 = shift_words(&z1, mid);
    let term2 = shift_words(&z2, 2 * mid);
    nat_add(&nat_add(&term0, &term1), &term2)
}

/// `x^2`, sharing [`mul`]'s dispatch since squaring via Karatsuba (dropping
/// the `x1*y0 + x0*y1` cross term in favor of `2*x1*x0`) isn't implemented as
/// a distinct fast path here; see `DESIGN.md`.
pub fn sqr(x: &Nat) -> Nat {
    mul(x, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::DECIMAL_BASE;

    #[test]
    fn test_mul_small() {
        let x = Nat::from_word(123);
        let y = Nat::from_word(456);
        assert_eq!(mul(&x, &y), Nat::from_word(123 * 456));
    }

    #[test]
    fn test_mul_zero() {
        assert_eq!(mul(&Nat::from_word(99), &Nat::ZERO), Nat::ZERO);
    }

    #[test]
    fn test_mul_carries_across_words() {
        let x = Nat::from_word(DECIMAL_BASE - 1);
        let y = Nat::from_word(DECIMAL_BASE - 1);
        let got = mul(&x, &y);
        // (B-1)^2 = B^2 - 2B + 1
        let expect = Nat::from_words(alloc::vec![1, DECIMAL_BASE - 2, 1]);
        assert_eq!(got, expect);
    }

    #[test]
    fn test_karatsuba_matches_schoolbook() {
        let mut xw = alloc::vec![1; 50];
        xw[49] = 7;
        let mut yw = alloc::vec![2; 50];
        yw[49] = 3;
        let x = Nat::from_words(xw);
        let y = Nat::from_words(yw);
        assert_eq!(mul(&x, &y), schoolbook(&x, &y));
    }

    #[test]
    fn test_sqr() {
        let x = Nat::from_word(12345);
        assert_eq!(sqr(&x), Nat::from_word(12345 * 12345));
    }
}
