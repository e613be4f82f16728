//! Square root (spec.md §4.3.6): split `x = m * 10^b` with `0.1 <= m < 1`,
//! find `t = 1/sqrt(m)` by Newton's iteration on `f(t) = 1/t^2 - m`, doubling
//! the working precision each round, then reattach `10^(b/2)`.

use crate::repr::{Context, Kind, Repr};
use crate::round::RoundingMode;
use crate::Decimal;
use decimal_base::Sign;
use decimal_nat::Nat;

/// Significant decimal digits an `f64` seed is trusted for; `f64` carries
/// about 15-17, so staying at the low end keeps every seed digit honest.
const SEED_PRECISION: u32 = 15;

/// `sqrt(x)`. Panics on a negative finite `x`, matching the no-NaN contract:
/// there is no representable result to return instead.
pub fn sqrt(x: &Decimal) -> Decimal {
    match x.repr.kind {
        Kind::Zero => return x.clone(),
        Kind::Infinite if x.repr.sign == Sign::Negative => {
            crate::error::panic_invalid_operation("sqrt of -inf")
        }
        Kind::Infinite => return x.clone(),
        Kind::Finite if x.repr.is_negative() => {
            crate::error::panic_invalid_operation("sqrt of negative value")
        }
        Kind::Finite => {}
    }

    let final_precision = x.context.precision.max(1).saturating_add(2);

    // x = m * 10^b, 0.1 <= m < 1: a value with `d` significant digits and
    // exponent `e` has digit_exponent `b = e + d`, and `m = mantissa * 10^-d`
    // lands in that range because `10^(d-1) <= mantissa < 10^d`.
    let mut b = x.repr.digit_exponent();
    let mut m_repr = Repr::finite(Sign::Positive, x.repr.mantissa.clone(), -(x.repr.digits() as i32));
    if b % 2 != 0 {
        // Multiplying/dividing m by 10 is just an exponent shift, since the
        // mantissa digits themselves don't change.
        if b > 0 {
            m_repr.exponent += 1;
            b -= 1;
        } else {
            m_repr.exponent -= 1;
            b += 1;
        }
    }
    debug_assert_eq!(b % 2, 0);

    let mut working_precision = SEED_PRECISION.min(final_precision);
    let mut t = seed(&m_repr, working_precision);
    while working_precision < final_precision {
        working_precision = working_precision.saturating_mul(2).min(final_precision);
        t = newton_step(&t, &m_repr, working_precision);
    }

    let final_ctx = Context::new(final_precision, x.context.rounding);
    let m = Decimal::from_parts(m_repr, final_ctx);
    let mut result_repr = crate::mul::mul(&m, &t.with_context(final_ctx)).repr;
    if result_repr.kind == Kind::Finite {
        result_repr.exponent += b / 2;
    }

    let (rounded, accuracy) = x.context.round(result_repr);
    Decimal { repr: rounded, context: x.context, accuracy }
}

/// Seed `t_0 = 1/sqrt(m)` from a double-precision approximation of `m`.
/// `m` is always in `[0.1, 1)`, so `1/sqrt(m)` is always in `(1, 3.163...]` —
/// comfortably inside `f64`'s range — but the fallback below still covers the
/// case where `m`'s text form somehow fails to round-trip through `f64`.
fn seed(m_repr: &Repr, precision: u32) -> Decimal {
    let ctx = Context::new(precision, RoundingMode::ToNearestEven);
    let m = Decimal::from_parts(m_repr.clone(), ctx);
    let approx = m.to_f64();
    let t0 = if approx.is_finite() && approx > 0.0 { 1.0 / approx.sqrt() } else { 2.0 };
    Decimal::from_f64(t0, ctx).unwrap_or_else(|_| Decimal::from_i64(2, ctx))
}

/// One round of `t_{n+1} = (1/2) * t_n * (3 - m * t_n^2)` at `precision`.
fn newton_step(t: &Decimal, m_repr: &Repr, precision: u32) -> Decimal {
    let ctx = Context::new(precision, RoundingMode::ToNearestEven);
    let t = t.with_context(ctx);
    let m = Decimal::from_parts(m_repr.clone(), ctx);
    let t_squared = crate::mul::mul(&t, &t);
    let m_t_squared = crate::mul::mul(&m, &t_squared);
    let three = Decimal::from_i64(3, ctx);
    let diff = crate::add::sub(&three, &m_t_squared);
    let half = Decimal::from_parts(Repr::finite(Sign::Positive, Nat::from_word(5), -1), ctx);
    crate::mul::mul(&crate::mul::mul(&t, &diff), &half)
}
