//! Rounding modes and the single digit-dropping primitive every arithmetic
//! operation funnels through.
//!
//! `dashu_float::round` expresses each mode as a separate marker type
//! implementing a shared `Round` trait, so the rounding mode is part of an
//! `FBig`'s own type. Spec.md's `Decimal` instead carries its rounding mode
//! as a runtime field, so the six modes are one enum and `round()` is a
//! single function matching on it, rather than a trait object per mode.

use decimal_nat::Nat;

/// How to resolve a rounding decision when the exact result isn't
/// representable in the target precision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    /// Round to the nearest representable value; on a tie, round to the one
    /// with an even last digit.
    ToNearestEven,
    /// Round to the nearest representable value; on a tie, round away from zero.
    ToNearestAway,
    /// Truncate towards zero.
    ToZero,
    /// Round away from zero.
    AwayFromZero,
    /// Round towards negative infinity.
    ToNegativeInf,
    /// Round towards positive infinity.
    ToPositiveInf,
}

impl Default for RoundingMode {
    /// `decimal-float`'s `DBig` alias uses this, matching `dashu_float::DBig`'s
    /// default of round-half-away-from-zero.
    fn default() -> Self {
        RoundingMode::ToNearestAway
    }
}

/// Which direction a rounded result moved from the exact value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Accuracy {
    /// The result is exact; no digits were dropped, or the dropped digits
    /// were all zero.
    Exact,
    /// The result is smaller in magnitude than the exact value.
    Below,
    /// The result is larger in magnitude than the exact value.
    Above,
}

/// Whether to add one to the kept digits, based on the dropped part.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Decision {
    Keep,
    RoundUp,
}

/// Classify a dropped tail (`first` = the digit immediately below the cut,
/// `sticky` = whether anything nonzero was dropped after it) as less than,
/// equal to, or greater than half of one unit in the last kept place.
fn half_cmp(first: u32, sticky: bool) -> core::cmp::Ordering {
    use core::cmp::Ordering::*;
    match first.cmp(&5) {
        Less => Less,
        Greater => Greater,
        Equal if sticky => Greater,
        Equal => Equal,
    }
}

fn decide(mode: RoundingMode, negative: bool, last_kept_odd: bool, first: u32, sticky: bool) -> Decision {
    if first == 0 && !sticky {
        return Decision::Keep;
    }
    match mode {
        RoundingMode::ToZero => Decision::Keep,
        RoundingMode::AwayFromZero => Decision::RoundUp,
        RoundingMode::ToNegativeInf => {
            if negative {
                Decision::RoundUp
            } else {
                Decision::Keep
            }
        }
        RoundingMode::ToPositiveInf => {
            if negative {
                Decision::Keep
            } else {
                Decision::RoundUp
            }
        }
        RoundingMode::ToNearestAway => match half_cmp(first, sticky) {
            core::cmp::Ordering::Less => Decision::Keep,
            core::cmp::Ordering::Equal => Decision::RoundUp,
            core::cmp::Ordering::Greater => Decision::RoundUp,
        },
        RoundingMode::ToNearestEven => match half_cmp(first, sticky) {
            core::cmp::Ordering::Less => Decision::Keep,
            core::cmp::Ordering::Equal => {
                if last_kept_odd {
                    Decision::RoundUp
                } else {
                    Decision::Keep
                }
            }
            core::cmp::Ordering::Greater => Decision::RoundUp,
        },
    }
}

/// Drop the low `drop_digits` decimal digits of `mantissa`, rounding the
/// remainder according to `mode`. `negative` is the sign of the value the
/// mantissa belongs to (rounding towards +/- infinity is sign-sensitive).
///
/// Returns the rounded mantissa (which may gain one extra digit, e.g.
/// `999 -> 100` with a carry noted by the caller via digit-count comparison)
/// and the resulting [`Accuracy`].
pub fn round(mantissa: &Nat, drop_digits: u32, mode: RoundingMode, negative: bool) -> (Nat, Accuracy) {
    if drop_digits == 0 {
        return (mantissa.clone(), Accuracy::Exact);
    }
    let kept = decimal_nat::shift_ops::shr_trunc(mantissa, drop_digits);
    let first_dropped = mantissa.digit_at((drop_digits - 1) as usize);
    let sticky = !mantissa.low_digits_are_zero((drop_digits - 1) as usize);
    let last_kept_odd = kept.digit_at(0) % 2 == 1;

    if first_dropped == 0 && !sticky {
        return (kept, Accuracy::Exact);
    }

    match decide(mode, negative, last_kept_odd, first_dropped, sticky) {
        Decision::Keep => (kept, if negative { Accuracy::Above } else { Accuracy::Below }),
        Decision::RoundUp => {
            let bumped = decimal_nat::add_ops::add(&kept, &Nat::from_word(1));
            (bumped, if negative { Accuracy::Below } else { Accuracy::Above })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> Nat {
        Nat::from_u64(v)
    }

    // (mantissa, drop, mode, expect_mantissa, expect_accuracy)
    #[test]
    fn test_round_modes_on_half() {
        let cases: &[(u64, u32, RoundingMode, u64, Accuracy)] = &[
            (125, 1, RoundingMode::ToNearestEven, 12, Accuracy::Below),
            (135, 1, RoundingMode::ToNearestEven, 14, Accuracy::Above),
            (125, 1, RoundingMode::ToNearestAway, 13, Accuracy::Above),
            (121, 1, RoundingMode::ToZero, 12, Accuracy::Below),
            (121, 1, RoundingMode::AwayFromZero, 13, Accuracy::Above),
            (120, 1, RoundingMode::ToZero, 12, Accuracy::Exact),
        ];
        for &(m, drop, mode, expect, ref acc) in cases {
            let (got, got_acc) = round(&n(m), drop, mode, false);
            assert_eq!(got, n(expect), "mode {:?} mantissa {}", mode, m);
            assert_eq!(&got_acc, acc, "mode {:?} mantissa {}", mode, m);
        }
    }

    #[test]
    fn test_round_negative_direction() {
        let (got, acc) = round(&n(126), 1, RoundingMode::ToNegativeInf, true);
        assert_eq!(got, n(13));
        assert_eq!(acc, Accuracy::Below);

        let (got, acc) = round(&n(126), 1, RoundingMode::ToPositiveInf, true);
        assert_eq!(got, n(12));
        assert_eq!(acc, Accuracy::Above);
    }

    #[test]
    fn test_round_zero_drop() {
        let (got, acc) = round(&n(42), 0, RoundingMode::ToNearestEven, false);
        assert_eq!(got, n(42));
        assert_eq!(acc, Accuracy::Exact);
    }

    #[test]
    fn test_round_carries_out() {
        // 995, drop 1 digit (rounding the trailing 5 away) -> 100, a new digit.
        let (got, acc) = round(&n(995), 1, RoundingMode::AwayFromZero, false);
        assert_eq!(got, n(100));
        assert_eq!(acc, Accuracy::Above);
    }
}
