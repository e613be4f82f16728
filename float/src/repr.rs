//! The `Decimal` representation: a tagged union of zero, a finite
//! sign*mantissa*10^exponent value, and signed infinity, paired with the
//! working precision and rounding mode that govern every operation on it.
//!
//! `dashu_float::FBig` splits the same way into a `Repr<BASE>` (value) and a
//! `Context<RoundingMode>` (policy); the split is kept here, but `Repr` is
//! fixed to radix `10^k` and carries an explicit [`Kind`] tag instead of
//! folding "zero" and "infinite" into mantissa/exponent sentinels.

use crate::round::RoundingMode;
use decimal_base::Sign;
use decimal_nat::Nat;

/// Which of the three shapes a [`Repr`] has.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    Zero,
    Finite,
    Infinite,
}

/// A decimal value: `sign * mantissa * 10^exponent` when [`Kind::Finite`],
/// signed zero or signed infinity otherwise.
///
/// Normalized so that a finite, nonzero mantissa's lowest decimal digit is
/// never zero (trailing zeros are absorbed into the exponent) — this keeps
/// equal values bit-identical and makes digit counts meaningful without a
/// separate "trim" pass before every comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repr {
    pub(crate) sign: Sign,
    pub(crate) kind: Kind,
    pub(crate) mantissa: Nat,
    pub(crate) exponent: i32,
}

impl Repr {
    /// The value `+0`. See [`Repr::signed_zero`] for a zero with a chosen
    /// sign: `neg` is meaningful for `Kind::Zero` (spec.md §3), matching
    /// IEEE 754 signed zero rather than collapsing both signs together the
    /// way `dashu_float::FBig` does.
    pub const fn zero() -> Self {
        Repr { sign: Sign::Positive, kind: Kind::Zero, mantissa: Nat::ZERO, exponent: 0 }
    }

    /// The value `±0` with an explicit sign.
    pub const fn signed_zero(sign: Sign) -> Self {
        Repr { sign, kind: Kind::Zero, mantissa: Nat::ZERO, exponent: 0 }
    }

    pub fn infinite(sign: Sign) -> Self {
        Repr { sign, kind: Kind::Infinite, mantissa: Nat::ZERO, exponent: 0 }
    }

    /// Build a finite value from an unnormalized mantissa/exponent pair,
    /// trimming trailing zero digits from the mantissa into the exponent.
    pub fn finite(sign: Sign, mantissa: Nat, exponent: i32) -> Self {
        if mantissa.is_zero() {
            return Self::signed_zero(sign);
        }
        Self::dnorm(Repr { sign, kind: Kind::Finite, mantissa, exponent })
    }

    /// Trim trailing zero decimal digits from a finite mantissa, bumping the
    /// exponent to compensate. A no-op on [`Kind::Zero`]/[`Kind::Infinite`].
    pub(crate) fn dnorm(mut self) -> Self {
        if self.kind != Kind::Finite || self.mantissa.is_zero() {
            return self;
        }
        let tz = trailing_zero_digits(&self.mantissa);
        if tz > 0 {
            self.mantissa = decimal_nat::shift_ops::shr_trunc(&self.mantissa, tz);
            self.exponent += tz as i32;
        }
        self
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.kind == Kind::Zero
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.kind == Kind::Infinite
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.kind == Kind::Finite
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Number of significant decimal digits in the mantissa (`0` for zero).
    #[inline]
    pub fn digits(&self) -> u32 {
        if self.kind == Kind::Finite {
            self.mantissa.digits() as u32
        } else {
            0
        }
    }

    /// Decimal exponent of the most significant digit: for a finite nonzero
    /// value, the `e` such that `10^(e-1) <= |value| < 10^e`.
    pub fn digit_exponent(&self) -> i32 {
        self.exponent + self.digits() as i32
    }

    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = sign;
        self
    }

    pub fn negate(mut self) -> Self {
        self.sign = -self.sign;
        self
    }
}

fn trailing_zero_digits(n: &Nat) -> u32 {
    let mut count = 0u32;
    loop {
        if n.low_digits_are_zero(count as usize + 1) {
            count += 1;
        } else {
            break;
        }
    }
    count.min(n.digits() as u32)
}

/// The working precision and rounding mode a sequence of operations shares.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Context {
    pub precision: u32,
    pub rounding: RoundingMode,
}

impl Context {
    pub fn new(precision: u32, rounding: RoundingMode) -> Self {
        Context { precision, rounding }
    }

    /// The context a binary operation should round its result under:
    /// `self` conventionally belongs to the left operand and governs unless
    /// its precision is `0` ("inherit on next operation", spec.md §3), in
    /// which case `other`'s precision is inherited. If neither has a
    /// precision set, the operation stays unrounded, same as a single `0`
    /// precision does.
    pub(crate) fn resolve(&self, other: &Context) -> Context {
        if self.precision == 0 && other.precision != 0 {
            Context::new(other.precision, self.rounding)
        } else {
            *self
        }
    }

    /// Round `repr` down to at most `self.precision` significant digits
    /// (`0` precision means no precision has been established yet, so the
    /// value is left exact), returning the rounded value and the resulting
    /// accuracy.
    pub fn round(&self, repr: Repr) -> (Repr, crate::round::Accuracy) {
        if self.precision == 0 || repr.kind != Kind::Finite {
            return (repr, crate::round::Accuracy::Exact);
        }
        let digits = repr.digits();
        if digits <= self.precision {
            return (repr, crate::round::Accuracy::Exact);
        }
        let drop = digits - self.precision;
        let (mantissa, acc) =
            crate::round::round(&repr.mantissa, drop, self.rounding, repr.is_negative());
        let exponent = repr.exponent + drop as i32;
        (Repr::finite(repr.sign, mantissa, exponent), acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dnorm_trims_trailing_zeros() {
        let r = Repr::finite(Sign::Positive, Nat::from_u64(1200), 0);
        assert_eq!(r.mantissa, Nat::from_u64(12));
        assert_eq!(r.exponent, 2);
    }

    #[test]
    fn test_finite_zero_mantissa_becomes_zero_kind() {
        let r = Repr::finite(Sign::Positive, Nat::ZERO, 5);
        assert!(r.is_zero());
    }

    #[test]
    fn test_context_round() {
        let ctx = Context::new(2, RoundingMode::ToNearestEven);
        let r = Repr::finite(Sign::Positive, Nat::from_u64(12345), 0);
        let (rounded, _) = ctx.round(r);
        assert_eq!(rounded.mantissa, Nat::from_u64(12));
        assert_eq!(rounded.exponent, 3);
    }

    #[test]
    fn test_signed_zero_survives_negate_and_with_sign() {
        let neg_zero = Repr::signed_zero(Sign::Negative);
        assert!(neg_zero.is_zero());
        assert_eq!(neg_zero.sign(), Sign::Negative);
        assert_eq!(neg_zero.clone().negate().sign(), Sign::Positive);
        assert_eq!(neg_zero.with_sign(Sign::Positive).sign(), Sign::Positive);
    }

    #[test]
    fn test_context_resolve_inherits_precision() {
        let unset = Context::new(0, RoundingMode::ToZero);
        let set = Context::new(10, RoundingMode::ToNearestEven);
        assert_eq!(unset.resolve(&set).precision, 10);
        assert_eq!(unset.resolve(&set).rounding, RoundingMode::ToZero);
        assert_eq!(set.resolve(&unset).precision, 10);
        assert_eq!(unset.resolve(&unset).precision, 0);
    }
}
