//! Arbitrary precision decimal floating-point arithmetic, native in base
//! `10^k` rather than built on a binary mantissa.
//!
//! This is a facade crate: the actual types live in `decimal-base` (shared
//! traits and errors), `decimal-nat` (the unsigned multi-word natural
//! number), and `decimal-float` (the signed, scaled `Decimal` value built on
//! top of it). Most users only need what's re-exported here.

#![cfg_attr(not(feature = "std"), no_std)]

/// Shared traits and error types ([`Sign`][base::Sign],
/// [`ParseError`][base::ParseError], [`ConversionError`][base::ConversionError]).
pub mod base {
    pub use decimal_base::*;
}

/// The unsigned radix-`10^k` natural number `decimal-float`'s mantissas are
/// built on.
pub mod nat {
    pub use decimal_nat::*;
}

/// The `Decimal` value itself, its rounding modes, and its text/conversion
/// surface.
pub mod float {
    pub use decimal_float::*;
}

pub use decimal_float::round::{Accuracy, RoundingMode};
pub use decimal_float::{Decimal, DEFAULT_PRECISION, MAX_EXPONENT, MAX_PRECISION, MIN_EXPONENT};

/// The largest base accepted when formatting or parsing a [`nat::Nat`] in a
/// base other than ten.
pub const MAX_BASE: u32 = 62;

/// Number of decimal digits packed into one machine word (`9` on 32-bit
/// targets, `19` on 64-bit targets).
pub use decimal_nat::DIGITS_PER_WORD;

/// The word radix `B = 10^DIGITS_PER_WORD`.
pub use decimal_nat::DECIMAL_BASE;
