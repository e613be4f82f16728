//! Growable word buffer used while assembling a [`Nat`](crate::repr::Nat).
//!
//! Unlike `dashu-int`'s `Buffer`, which inlines one or two words to avoid
//! allocating for small integers, this is a plain `Vec<Word>` — the small-size
//! inline optimization isn't carried over here (see `DESIGN.md`).

use crate::word::Word;
use alloc::vec::Vec;

/// A buffer of radix-`B` words, least-significant first, while it is still
/// being built up by an arithmetic routine.
pub type Buffer = Vec<Word>;

/// Trim trailing (most-significant) zero words so the highest word, if any,
/// is nonzero.
#[inline]
pub fn trim(buf: &mut Buffer) {
    while matches!(buf.last(), Some(&0)) {
        buf.pop();
    }
}
