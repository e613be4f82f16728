//! Division (spec.md §4.3.5): long division of mantissas with extra guard
//! digits so the context's rounding mode sees an accurate sticky bit.

use crate::repr::{Kind, Repr};
use crate::Decimal;

/// Extra decimal digits of working precision carried during division, beyond
/// the context's target precision, so the final round sees real dropped
/// digits rather than an already-truncated quotient.
const GUARD_DIGITS: u32 = 9;

pub(crate) fn div_finite(x: &Repr, y: &Repr, want_digits: u32) -> Repr {
    debug_assert!(!y.mantissa.is_zero());
    let shift = want_digits + GUARD_DIGITS + y.digits();
    let scaled_numerator = decimal_nat::shift_ops::shl(&x.mantissa, shift);
    let (quotient, _remainder) = decimal_nat::div_ops::divmod(&scaled_numerator, &y.mantissa);
    let exponent = x.exponent - y.exponent - shift as i32;
    Repr::finite(x.sign * y.sign, quotient, exponent)
}

/// `x / y`.
pub fn div(x: &Decimal, y: &Decimal) -> Decimal {
    let ctx = x.context.resolve(&y.context);
    let repr = match (x.repr.kind, y.repr.kind) {
        (_, Kind::Zero) => {
            if x.repr.kind == Kind::Zero {
                crate::error::panic_invalid_operation("0 / 0")
            } else {
                crate::error::panic_division_by_zero()
            }
        }
        (Kind::Infinite, Kind::Infinite) => crate::error::panic_invalid_operation("inf / inf"),
        (Kind::Infinite, _) => Repr::infinite(x.repr.sign * y.repr.sign),
        (_, Kind::Infinite) => Repr::signed_zero(x.repr.sign * y.repr.sign),
        (Kind::Zero, Kind::Finite) => Repr::signed_zero(x.repr.sign * y.repr.sign),
        (Kind::Finite, Kind::Finite) => div_finite(&x.repr, &y.repr, ctx.precision.max(1)),
    };
    let (rounded, accuracy) = ctx.round(repr);
    Decimal { repr: rounded, context: ctx, accuracy }
}

impl core::ops::Div for &Decimal {
    type Output = Decimal;
    fn div(self, rhs: Self) -> Decimal {
        div(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_div_exact() {
        let q = &d("10") / &d("4");
        assert_eq!(q, d("2.5"));
    }

    #[test]
    fn test_div_repeating() {
        let ctx = crate::repr::Context::new(5, crate::round::RoundingMode::ToNearestEven);
        let x = Decimal::from_parts(d("1").repr.clone(), ctx);
        let y = Decimal::from_parts(d("3").repr.clone(), ctx);
        let q = &x / &y;
        assert_eq!(q.repr.digits(), 5);
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_panics() {
        let _ = &d("1") / &d("0");
    }

    #[test]
    #[should_panic]
    fn test_zero_div_zero_panics() {
        let _ = &d("0") / &d("0");
    }

    #[test]
    fn test_zero_div_finite_sign_is_xor() {
        assert_eq!((&d("0") / &d("-5")).repr.sign(), decimal_base::Sign::Negative);
    }
}
