//! Addition and subtraction (spec.md §4.3.3).
//!
//! Mirrors `dashu_float::add`'s alignment-then-combine shape: bring both
//! operands to a common exponent (the smaller of the two, so no precision is
//! lost before rounding), add or subtract mantissas depending on sign, then
//! round to the context's precision.

use crate::repr::{Kind, Repr};
use crate::round::RoundingMode;
use crate::Decimal;
use decimal_base::Sign;
use decimal_nat::{shift_ops, Nat};

/// Bring `x` and `y` to a common exponent, returning `(x_mantissa,
/// y_mantissa, exponent)`.
pub(crate) fn align(x: &Repr, y: &Repr) -> (Nat, Nat, i32) {
    let exponent = x.exponent.min(y.exponent);
    let xm = shift_ops::shl(&x.mantissa, (x.exponent - exponent) as u32);
    let ym = shift_ops::shl(&y.mantissa, (y.exponent - exponent) as u32);
    (xm, ym, exponent)
}

/// The sign IEEE 754-2008 §6.3 gives an exact zero sum: `+0` in every
/// rounding mode except `ToNegativeInf`, which gives `-0`.
pub(crate) fn cancellation_sign(mode: RoundingMode) -> Sign {
    if mode == RoundingMode::ToNegativeInf {
        Sign::Negative
    } else {
        Sign::Positive
    }
}

/// `add_finite`, exposed for `mul::fma` to combine a product with an addend
/// without going through a full [`Decimal`].
pub(crate) fn add_finite_pub(x: &Repr, y: &Repr, mode: RoundingMode) -> Repr {
    add_finite(x, y, mode)
}

fn add_finite(x: &Repr, y: &Repr, mode: RoundingMode) -> Repr {
    let (xm, ym, exponent) = align(x, y);
    if x.sign == y.sign {
        Repr::finite(x.sign, decimal_nat::add_ops::add(&xm, &ym), exponent)
    } else {
        match xm.cmp(&ym) {
            core::cmp::Ordering::Equal => Repr::signed_zero(cancellation_sign(mode)),
            core::cmp::Ordering::Greater => {
                Repr::finite(x.sign, decimal_nat::add_ops::sub(&xm, &ym), exponent)
            }
            core::cmp::Ordering::Less => {
                Repr::finite(y.sign, decimal_nat::add_ops::sub(&ym, &xm), exponent)
            }
        }
    }
}

/// `x + y`, following IEEE-754-style infinity arithmetic: `inf + (-inf)`
/// panics, matching `dashu_float`'s documented behavior for invalid
/// operations (no NaN representation to return instead).
pub fn add(x: &Decimal, y: &Decimal) -> Decimal {
    let ctx = x.context.resolve(&y.context);
    let repr = match (x.repr.kind, y.repr.kind) {
        (Kind::Infinite, Kind::Infinite) => {
            if x.repr.sign != y.repr.sign {
                crate::error::panic_invalid_operation("inf + -inf");
            }
            Repr::infinite(x.repr.sign)
        }
        (Kind::Infinite, _) => Repr::infinite(x.repr.sign),
        (_, Kind::Infinite) => Repr::infinite(y.repr.sign),
        (Kind::Zero, Kind::Zero) => {
            if x.repr.sign == y.repr.sign {
                Repr::signed_zero(x.repr.sign)
            } else {
                Repr::signed_zero(cancellation_sign(ctx.rounding))
            }
        }
        (Kind::Zero, _) => y.repr.clone(),
        (_, Kind::Zero) => x.repr.clone(),
        (Kind::Finite, Kind::Finite) => add_finite(&x.repr, &y.repr, ctx.rounding),
    };
    let (rounded, accuracy) = ctx.round(repr);
    Decimal { repr: rounded, context: ctx, accuracy }
}

/// `x - y`.
pub fn sub(x: &Decimal, y: &Decimal) -> Decimal {
    add(x, &y.clone().negate())
}

impl core::ops::Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: Self) -> Decimal {
        add(self, rhs)
    }
}

impl core::ops::Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: Self) -> Decimal {
        sub(self, rhs)
    }
}

impl core::ops::Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_basic() {
        assert_eq!(&d("1.5") + &d("2.25"), d("3.75"));
    }

    #[test]
    fn test_sub_to_zero() {
        assert!((&d("5") - &d("5")).repr.is_zero());
    }

    #[test]
    fn test_add_different_exponents() {
        assert_eq!(&d("100") + &d("0.001"), d("100.001"));
    }

    #[test]
    #[should_panic]
    fn test_inf_minus_inf_panics() {
        let pos_inf = Decimal::infinity(Sign::Positive, Default::default());
        let neg_inf = Decimal::infinity(Sign::Negative, Default::default());
        let _ = &pos_inf + &neg_inf;
    }

    #[test]
    fn test_add_with_precision_rounding() {
        let ctx = crate::repr::Context::new(3, RoundingMode::ToNearestEven);
        let x = Decimal::from_parts(d("1.23").repr.clone(), ctx);
        let y = Decimal::from_parts(d("0.004").repr.clone(), ctx);
        let sum = &x + &y;
        assert_eq!(sum.repr.digits(), 3);
    }

    #[test]
    fn test_cancellation_is_positive_zero_by_default() {
        let sum = &d("5") + &d("-5");
        assert!(sum.repr.is_zero());
        assert_eq!(sum.repr.sign(), Sign::Positive);
    }

    #[test]
    fn test_cancellation_is_negative_zero_under_to_negative_inf() {
        let ctx = crate::repr::Context::new(10, RoundingMode::ToNegativeInf);
        let x = Decimal::from_parts(d("5").repr.clone(), ctx);
        let y = Decimal::from_parts(d("-5").repr.clone(), ctx);
        let sum = &x + &y;
        assert_eq!(sum.repr.sign(), Sign::Negative);
    }

    #[test]
    fn test_like_signed_zeros_keep_their_sign() {
        let ctx = crate::repr::Context::new(10, RoundingMode::ToNearestEven);
        let neg_zero = Decimal::from_parts(Repr::signed_zero(Sign::Negative), ctx);
        let sum = &neg_zero + &neg_zero;
        assert_eq!(sum.repr.sign(), Sign::Negative);
    }
}
