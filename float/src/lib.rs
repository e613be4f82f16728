//! An arbitrary precision decimal floating-point number, native in base
//! `10^k`: `sign * mantissa * 10^exponent`, with a configurable working
//! precision and rounding mode (spec.md §4.3).
//!
//! Mirrors `dashu_float::FBig<RoundingMode, BASE>`'s split into a value
//! ([`repr::Repr`]) and a policy ([`repr::Context`]), but fixes the radix to
//! a power of ten and keeps the rounding mode as a runtime field rather than
//! a type parameter — see `DESIGN.md` for why.
//!
//! # Differences from IEEE 754
//!
//! Like `dashu_float::FBig`, this type does not implement the full IEEE 754
//! decimal model:
//! - There is no NaN. Operations that would produce one (`0/0`, `inf - inf`,
//!   `sqrt` of a negative number) panic instead.
//! - There are no subnormal values; the exponent range is simply clamped.
//! - Precision is unbounded by default (`precision == 0`); IEEE 754's fixed
//!   binary interchange widths don't apply here.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod add;
pub mod cmp;
pub mod convert;
pub mod div;
pub mod error;
pub mod fmt;
pub mod mul;
pub mod parse;
pub mod repr;
pub mod root;
pub mod round;
pub mod sign;

#[cfg(feature = "serde")]
pub mod serde;

use repr::{Context, Repr};
use round::{Accuracy, RoundingMode};

/// Default working precision (significant decimal digits) for a `Decimal`
/// built without an explicit context, matching common "34 decimal digits"
/// decimal128-scale defaults.
pub const DEFAULT_PRECISION: u32 = 34;

/// Ceiling on the precision a `Context` can request.
pub const MAX_PRECISION: u32 = u32::MAX / 2;

/// Smallest representable exponent.
pub const MIN_EXPONENT: i32 = i32::MIN / 2;

/// Largest representable exponent.
pub const MAX_EXPONENT: i32 = i32::MAX / 2;

impl Default for Context {
    fn default() -> Self {
        Context::new(DEFAULT_PRECISION, RoundingMode::default())
    }
}

/// An arbitrary-precision decimal floating-point value.
#[derive(Clone, Debug)]
pub struct Decimal {
    pub(crate) repr: Repr,
    pub(crate) context: Context,
    pub(crate) accuracy: Accuracy,
}

impl Decimal {
    /// Assemble a `Decimal` from an already-built representation and
    /// context, without rounding. Callers that need the context's precision
    /// enforced should go through an arithmetic operation or [`Context::round`].
    pub fn from_parts(repr: Repr, context: Context) -> Self {
        Decimal { repr, context, accuracy: Accuracy::Exact }
    }

    /// Signed infinity under the given context.
    pub fn infinity(sign: decimal_base::Sign, context: Context) -> Self {
        Decimal { repr: Repr::infinite(sign), context, accuracy: Accuracy::Exact }
    }

    /// Signed zero under the given context.
    pub fn zero(context: Context) -> Self {
        Decimal { repr: Repr::zero(), context, accuracy: Accuracy::Exact }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.repr.is_infinite()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.repr.is_finite()
    }

    #[inline]
    pub fn sign(&self) -> decimal_base::Sign {
        self.repr.sign()
    }

    /// Number of significant decimal digits currently stored (not the
    /// context's precision ceiling).
    #[inline]
    pub fn digits(&self) -> u32 {
        self.repr.digits()
    }

    /// Whether the last operation that produced this value rounded, and
    /// which way.
    #[inline]
    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    #[inline]
    pub fn context(&self) -> Context {
        self.context
    }

    pub(crate) fn negate(mut self) -> Self {
        self.repr = self.repr.negate();
        self
    }

    /// `sqrt(self)`, see [`root::sqrt`].
    pub fn sqrt(&self) -> Self {
        root::sqrt(self)
    }

    /// `self * rhs + add`, rounded once, see [`mul::fma`].
    pub fn mul_add(&self, rhs: &Self, add: &Self) -> Self {
        mul::fma(self, rhs, add)
    }

    /// Re-round this value under a different context.
    pub fn with_context(&self, context: Context) -> Self {
        let (repr, accuracy) = context.round(self.repr.clone());
        Decimal { repr, context, accuracy }
    }

    /// Set the working precision. Unlike [`Decimal::with_context`], `0`
    /// doesn't mean "leave unrounded" here: setting the precision of an
    /// existing finite value to `0` collapses it to `±0` (spec.md's
    /// boundary behavior for `SetPrec(0)`), since there's no longer a digit
    /// budget for it to occupy. `±∞` is preserved unchanged — an infinity
    /// has no digits to drop in the first place.
    pub fn set_prec(&self, prec: u32) -> Self {
        let context = Context::new(prec, self.context.rounding);
        if prec == 0 && self.repr.is_finite() {
            return Decimal {
                repr: Repr::signed_zero(self.repr.sign()),
                context,
                accuracy: Accuracy::Below,
            };
        }
        self.with_context(context)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.repr = out.repr.with_sign(decimal_base::Sign::Positive);
        out
    }
}

impl core::str::FromStr for Decimal {
    type Err = decimal_base::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr = parse::parse_decimal(s)?;
        let context = Context::default();
        let (rounded, accuracy) = context.round(repr);
        Ok(Decimal { repr: rounded, context, accuracy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = Context::default();
        assert_eq!(ctx.precision, DEFAULT_PRECISION);
        assert_eq!(ctx.rounding, RoundingMode::ToNearestAway);
    }

    #[test]
    fn test_parse_and_accessors() {
        let d: Decimal = "3.14".parse().unwrap();
        assert!(d.is_finite());
        assert!(!d.is_zero());
        assert_eq!(d.digits(), 3);
    }

    #[test]
    fn test_abs() {
        let d: Decimal = "-5".parse().unwrap();
        assert_eq!(d.abs().sign(), decimal_base::Sign::Positive);
    }

    #[test]
    fn test_set_prec_rounds() {
        let d: Decimal = "1.23456".parse().unwrap();
        let rounded = d.set_prec(3);
        assert_eq!(rounded.digits(), 3);
    }

    #[test]
    fn test_set_prec_zero_collapses_finite_to_signed_zero() {
        let d: Decimal = "-12.5".parse().unwrap();
        let collapsed = d.set_prec(0);
        assert!(collapsed.is_zero());
        assert_eq!(collapsed.sign(), decimal_base::Sign::Negative);
    }

    #[test]
    fn test_set_prec_zero_preserves_infinity() {
        let inf = Decimal::infinity(decimal_base::Sign::Positive, Context::default());
        let still_inf = inf.set_prec(0);
        assert!(still_inf.is_infinite());
    }
}
