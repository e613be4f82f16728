//! Multiplication and fused multiply-add (spec.md §4.3.4).

use crate::repr::{Kind, Repr};
use crate::Decimal;
use decimal_base::Sign;

pub(crate) fn mul_finite(x: &Repr, y: &Repr) -> Repr {
    let mantissa = decimal_nat::mul_ops::mul(&x.mantissa, &y.mantissa);
    Repr::finite(x.sign * y.sign, mantissa, x.exponent + y.exponent)
}

pub fn mul(x: &Decimal, y: &Decimal) -> Decimal {
    let ctx = x.context.resolve(&y.context);
    let repr = match (x.repr.kind, y.repr.kind) {
        (Kind::Infinite, Kind::Zero) | (Kind::Zero, Kind::Infinite) => {
            crate::error::panic_invalid_operation("0 * inf")
        }
        (Kind::Infinite, _) | (_, Kind::Infinite) => Repr::infinite(x.repr.sign * y.repr.sign),
        (Kind::Zero, _) | (_, Kind::Zero) => Repr::signed_zero(x.repr.sign * y.repr.sign),
        (Kind::Finite, Kind::Finite) => mul_finite(&x.repr, &y.repr),
    };
    let (rounded, accuracy) = ctx.round(repr);
    Decimal { repr: rounded, context: ctx, accuracy }
}

/// `x * y + z`, rounded once at the end instead of twice, matching the
/// accuracy improvement a dedicated FMA gives over separate `mul` then `add`.
pub fn fma(x: &Decimal, y: &Decimal, z: &Decimal) -> Decimal {
    let ctx = x.context.resolve(&y.context).resolve(&z.context);
    if x.repr.kind == Kind::Infinite
        || y.repr.kind == Kind::Infinite
        || z.repr.kind == Kind::Infinite
    {
        // Falls back to the two-step path; infinities are rare enough here
        // that the extra rounding step doesn't matter.
        let xy = mul(x, y);
        return crate::add::add(&xy, z);
    }
    let product_sign = x.repr.sign * y.repr.sign;
    let product = if x.repr.kind == Kind::Zero || y.repr.kind == Kind::Zero {
        Repr::signed_zero(product_sign)
    } else {
        mul_finite(&x.repr, &y.repr)
    };
    let summed = match (product.kind, z.repr.kind) {
        (Kind::Zero, Kind::Zero) => {
            if product.sign == z.repr.sign {
                Repr::signed_zero(product.sign)
            } else {
                Repr::signed_zero(crate::add::cancellation_sign(ctx.rounding))
            }
        }
        (Kind::Zero, _) => z.repr.clone(),
        (_, Kind::Zero) => product,
        (Kind::Finite, Kind::Finite) => crate::add::add_finite_pub(&product, &z.repr, ctx.rounding),
        _ => unreachable!("infinities handled above"),
    };
    let (rounded, accuracy) = ctx.round(summed);
    Decimal { repr: rounded, context: ctx, accuracy }
}

impl core::ops::Mul for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: Self) -> Decimal {
        mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(&d("1.5") * &d("2"), d("3.0"));
    }

    #[test]
    fn test_mul_zero() {
        assert!((&d("0") * &d("123.45")).repr.is_zero());
    }

    #[test]
    fn test_mul_sign() {
        assert_eq!((&d("-2") * &d("3")).repr.sign, Sign::Negative);
    }

    #[test]
    fn test_fma_matches_mul_then_add() {
        let (x, y, z) = (d("1.1"), d("2.2"), d("3.3"));
        let direct = fma(&x, &y, &z);
        let stepwise = crate::add::add(&mul(&x, &y), &z);
        assert_eq!(direct, stepwise);
    }

    #[test]
    fn test_mul_zero_sign_is_xor_of_operand_signs() {
        assert_eq!((&d("0") * &d("-5")).repr.sign(), Sign::Negative);
        assert_eq!((&d("-0") * &d("-5")).repr.sign(), Sign::Positive);
    }
}
