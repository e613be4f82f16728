//! Ordering and absolute-value comparison (spec.md §4.3.7).
//!
//! Follows `dashu_float`'s `Ord` impl: compare sign first, then (for two
//! values of the same sign) the position of the most significant digit, and
//! only fall back to a full mantissa comparison when those agree.

use crate::repr::{Kind, Repr};
use crate::Decimal;
use core::cmp::Ordering;
use decimal_base::Sign;

pub fn cmp(x: &Repr, y: &Repr) -> Ordering {
    match (x.kind, y.kind) {
        (Kind::Infinite, Kind::Infinite) => sign_ord(x.sign, y.sign),
        (Kind::Infinite, _) => sign_ord(x.sign, Sign::Positive),
        (_, Kind::Infinite) => sign_ord(Sign::Positive, y.sign),
        (Kind::Zero, Kind::Zero) => Ordering::Equal,
        (Kind::Zero, Kind::Finite) => {
            if y.sign == Sign::Negative {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Kind::Finite, Kind::Zero) => {
            if x.sign == Sign::Negative {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Kind::Finite, Kind::Finite) => cmp_finite(x, y),
    }
}

fn sign_ord(x: Sign, y: Sign) -> Ordering {
    match (x, y) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn cmp_finite(x: &Repr, y: &Repr) -> Ordering {
    if x.sign != y.sign {
        return sign_ord(x.sign, y.sign);
    }
    let magnitude = cmp_abs(x, y);
    if x.sign == Sign::Negative {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Compare `|x|` and `|y|`, ignoring sign (spec.md's `CmpAbs`).
pub fn cmp_abs(x: &Repr, y: &Repr) -> Ordering {
    match (x.kind, y.kind) {
        (Kind::Infinite, Kind::Infinite) => Ordering::Equal,
        (Kind::Infinite, _) => Ordering::Greater,
        (_, Kind::Infinite) => Ordering::Less,
        (Kind::Zero, Kind::Zero) => Ordering::Equal,
        (Kind::Zero, _) => Ordering::Less,
        (_, Kind::Zero) => Ordering::Greater,
        (Kind::Finite, Kind::Finite) => {
            let exp_cmp = x.digit_exponent().cmp(&y.digit_exponent());
            if exp_cmp != Ordering::Equal {
                return exp_cmp;
            }
            // digit_exponent ties don't mean equal digit counts (e.g. "1.9"
            // vs "1.00003" both have digit_exponent 1), so the mantissas
            // must be aligned to a common exponent before comparing.
            let (xm, ym, _) = crate::add::align(x, y);
            xm.cmp(&ym)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        cmp(&self.repr, &other.repr) == Ordering::Equal
    }
}
impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp(&self.repr, &other.repr))
    }
}
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp(&self.repr, &other.repr)
    }
}
