//! Unsigned arbitrary-precision integers stored in radix `B = 10^k` words.
//!
//! This is the natural-number layer `decimal-float` builds its mantissas on
//! top of: word primitives ([`word`]), the [`Nat`] representation, and the
//! arithmetic operating on it (add/sub, shift-by-digits, multiply, divide).
//! It mirrors `dashu-int`'s layering but fixes the radix at a power of ten
//! instead of a power of two, so a [`Nat`]'s digits line up with the decimal
//! digits a `Decimal` ultimately prints.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod add_ops;
pub mod buffer;
pub mod cmp;
pub mod convert;
pub mod div_ops;
pub mod error;
pub mod fmt;
pub mod mul_ops;
pub mod parse;
pub mod repr;
pub mod shift_ops;
pub mod sqr_ops;
pub mod word;

pub use repr::Nat;
pub use word::{Word, DECIMAL_BASE, DIGITS_PER_WORD};

impl core::ops::Add for &Nat {
    type Output = Nat;
    fn add(self, rhs: Self) -> Nat {
        add_ops::add(self, rhs)
    }
}

impl core::ops::Sub for &Nat {
    type Output = Nat;
    fn sub(self, rhs: Self) -> Nat {
        add_ops::sub(self, rhs)
    }
}

impl core::ops::Mul for &Nat {
    type Output = Nat;
    fn mul(self, rhs: Self) -> Nat {
        mul_ops::mul(self, rhs)
    }
}

impl core::ops::Div for &Nat {
    type Output = Nat;
    fn div(self, rhs: Self) -> Nat {
        div_ops::divmod(self, rhs).0
    }
}

impl core::ops::Rem for &Nat {
    type Output = Nat;
    fn rem(self, rhs: Self) -> Nat {
        div_ops::divmod(self, rhs).1
    }
}

impl core::str::FromStr for Nat {
    type Err = decimal_base::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_digits(s)
    }
}
