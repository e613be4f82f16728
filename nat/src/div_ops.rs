//! Division of naturals.
//!
//! Single-word divisors go through [`div_word`] (the `divVWW` primitive
//! applied digit-by-digit). Multi-word divisors use a schoolbook long
//! division normalized the way Knuth's Algorithm D normalizes a binary
//! bignum, adapted to radix `B = 10^k` words instead of radix-`2^W` limbs.
//!
//! The recursive divide-and-conquer division spec.md mentions as an
//! optimization for very large operands (its ~100-word threshold) is not
//! implemented; schoolbook division is used at every size. See `DESIGN.md`.

use crate::buffer::Buffer;
use crate::mul_ops::mul_word;
use crate::repr::Nat;
use crate::word::{div_vww, DoubleWord, Word, DECIMAL_BASE};

/// `x / y`, `x % y` for a single-word divisor `y != 0`.
pub fn div_word(x: &Nat, y: Word) -> (Nat, Word) {
    debug_assert!(y != 0);
    if x.is_zero() {
        return (Nat::ZERO, 0);
    }
    let mut q: Buffer = alloc::vec![0; x.word_len()];
    let rem = div_vww(&mut q, x.words(), y, 0);
    (Nat::from_words(q), rem)
}

/// `x / y`, `x % y` for an arbitrary nonzero `y`.
pub fn divmod(x: &Nat, y: &Nat) -> (Nat, Nat) {
    debug_assert!(!y.is_zero(), "division by zero");
    if y.word_len() == 1 {
        let (q, r) = div_word(x, y.words()[0]);
        return (q, Nat::from_word(r));
    }
    if x < y {
        return (Nat::ZERO, x.clone());
    }
    knuth_divmod(x, y)
}

fn knuth_divmod(u: &Nat, v: &Nat) -> (Nat, Nat) {
    let n = v.word_len();
    let m = u.word_len() - n;
    let b = DECIMAL_BASE as DoubleWord;

    let v_top = v.words()[n - 1] as DoubleWord;
    let d = (b / (v_top + 1)) as Word;

    let un_nat = mul_word(u, d);
    let mut ubuf: Buffer = alloc::vec![0; m + n + 1];
    ubuf[..un_nat.word_len()].copy_from_slice(un_nat.words());

    let vn_nat = mul_word(v, d);
    let mut vbuf: Buffer = alloc::vec![0; n];
    vbuf[..vn_nat.word_len()].copy_from_slice(vn_nat.words());

    let mut q: Buffer = alloc::vec![0; m + 1];

    for j in (0..=m).rev() {
        let u_top = ubuf[j + n] as DoubleWord;
        let u_next = ubuf[j + n - 1] as DoubleWord;
        let v_top = vbuf[n - 1] as DoubleWord;
        let numerator = u_top * b + u_next;
        let mut qhat = numerator / v_top;
        let mut rhat = numerator % v_top;

        while qhat >= b
            || (n >= 2 && qhat * vbuf[n - 2] as DoubleWord > rhat * b + ubuf[j + n - 2] as DoubleWord)
        {
            qhat -= 1;
            rhat += v_top;
            if rhat >= b {
                break;
            }
        }

        let mut mul_carry: DoubleWord = 0;
        let mut borrow: i128 = 0;
        for i in 0..n {
            let p = qhat * vbuf[i] as DoubleWord + mul_carry;
            mul_carry = p / b;
            let plo = (p % b) as i128;
            let diff = ubuf[j + i] as i128 - plo - borrow;
            if diff < 0 {
                ubuf[j + i] = (diff + DECIMAL_BASE as i128) as Word;
                borrow = 1;
            } else {
                ubuf[j + i] = diff as Word;
                borrow = 0;
            }
        }
        let top_diff = ubuf[j + n] as i128 - mul_carry as i128 - borrow;

        if top_diff < 0 {
            // qhat was one too large: add v back and undo the last borrow.
            qhat -= 1;
            let mut carry: Word = 0;
            for i in 0..n {
                let sum = ubuf[j + i] as DoubleWord + vbuf[i] as DoubleWord + carry as DoubleWord;
                if sum >= b {
                    ubuf[j + i] = (sum - b) as Word;
                    carry = 1;
                } else {
                    ubuf[j + i] = sum as Word;
                    carry = 0;
                }
            }
            ubuf[j + n] = (top_diff + DECIMAL_BASE as i128 + carry as i128) as Word;
        } else {
            ubuf[j + n] = top_diff as Word;
        }
        q[j] = qhat as Word;
    }

    let quotient = Nat::from_words(q);
    let remainder_scaled = Nat::from_words(ubuf[..n].to_vec());
    let (remainder, rem_rem) = div_word(&remainder_scaled, d);
    debug_assert_eq!(rem_rem, 0, "normalization factor must divide out exactly");
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mul_ops::mul;

    #[test]
    fn test_div_word() {
        let x = Nat::from_word(1000);
        let (q, r) = div_word(&x, 7);
        assert_eq!(q, Nat::from_word(142));
        assert_eq!(r, 6);
    }

    #[test]
    fn test_divmod_single_word_divisor_multiword_dividend() {
        let x = Nat::from_words(alloc::vec![0, 1]); // B
        let y = Nat::from_word(3);
        let (q, r) = divmod(&x, &y);
        let check = nat_add_mul(&q, &y, &r);
        assert_eq!(check, x);
    }

    #[test]
    fn test_divmod_multiword_divisor() {
        let a = Nat::from_words(alloc::vec![123, 456, 7]);
        let b = Nat::from_words(alloc::vec![99, 2]);
        let (q, r) = divmod(&a, &b);
        assert!(r < b);
        let check = nat_add_mul(&q, &b, &r);
        assert_eq!(check, a);
    }

    #[test]
    fn test_divmod_exact() {
        let a = Nat::from_word(144);
        let b = Nat::from_word(12);
        let (q, r) = divmod(&a, &b);
        assert_eq!(q, Nat::from_word(12));
        assert_eq!(r, Nat::ZERO);
    }

    #[test]
    fn test_divmod_dividend_smaller_than_divisor() {
        let a = Nat::from_word(5);
        let b = Nat::from_word(100);
        let (q, r) = divmod(&a, &b);
        assert_eq!(q, Nat::ZERO);
        assert_eq!(r, a);
    }

    fn nat_add_mul(q: &Nat, b: &Nat, r: &Nat) -> Nat {
        crate::add_ops::add(&mul(q, b), r)
    }
}
