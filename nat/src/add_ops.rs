//! Addition and subtraction of naturals (spec.md §4.2).

use crate::buffer::Buffer;
use crate::repr::Nat;
use crate::word::{add_vv, add_vw, sub_vv, sub_vw};
use core::cmp::Ordering;

/// `x + y`. Extends the shorter operand logically with zero words.
pub fn add(x: &Nat, y: &Nat) -> Nat {
    let (long, short) = if x.word_len() >= y.word_len() {
        (x, y)
    } else {
        (y, x)
    };
    let mut buf: Buffer = alloc::vec![0; long.word_len() + 1];
    let carry = add_vv(
        &mut buf[..short.word_len()],
        &long.words()[..short.word_len()],
        short.words(),
    );
    buf[short.word_len()..long.word_len()].copy_from_slice(&long.words()[short.word_len()..]);
    let final_carry = if carry != 0 {
        add_vw(
            &mut buf[short.word_len()..long.word_len()],
            &long.words()[short.word_len()..],
            1,
        )
    } else {
        0
    };
    if final_carry != 0 {
        buf[long.word_len()] = 1;
    }
    Nat::from_words(buf)
}

/// `x - y`. Requires `x >= y`; callers must compare magnitudes first (the
/// Decimal layer always does, per spec.md §4.3.3).
pub fn sub(x: &Nat, y: &Nat) -> Nat {
    debug_assert!(x >= y, "Nat::sub requires x >= y");
    let mut buf: Buffer = alloc::vec![0; x.word_len()];
    let borrow = sub_vv(
        &mut buf[..y.word_len()],
        &x.words()[..y.word_len()],
        y.words(),
    );
    buf[y.word_len()..].copy_from_slice(&x.words()[y.word_len()..]);
    if borrow != 0 {
        let b = sub_vw(&mut buf[y.word_len()..], &x.words()[y.word_len()..], 1);
        debug_assert_eq!(b, 0, "Nat::sub borrow underflowed x - y with x >= y");
    }
    Nat::from_words(buf)
}

/// Compare magnitudes; thin wrapper kept alongside `add`/`sub` since callers
/// of `sub` need it to decide operand order.
#[inline]
pub fn cmp(x: &Nat, y: &Nat) -> Ordering {
    crate::cmp::cmp(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::DECIMAL_BASE;

    #[test]
    fn test_add_basic() {
        let a = Nat::from_word(DECIMAL_BASE - 1);
        let b = Nat::from_word(1);
        let sum = add(&a, &b);
        assert_eq!(sum, Nat::from_words(alloc::vec![0, 1]));
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = Nat::from_words(alloc::vec![DECIMAL_BASE - 1, 7]);
        let b = Nat::from_words(alloc::vec![5, 2]);
        let sum = add(&a, &b);
        let back = sub(&sum, &b);
        assert_eq!(back, a);
    }

    #[test]
    fn test_sub_to_zero() {
        let a = Nat::from_word(42);
        assert_eq!(sub(&a, &a), Nat::ZERO);
    }
}
