//! `decimal_base::{Abs, Signed, AbsEq, AbsOrd}` impls for [`Decimal`]
//! (spec.md §4.3.7's absolute-value and magnitude-comparison operations).

use crate::cmp::cmp_abs;
use crate::Decimal;
use decimal_base::{Abs, AbsEq, AbsOrd, Sign, Signed};

impl Abs for Decimal {
    type Output = Decimal;

    /// Same as [`Decimal::abs`], as the trait form.
    #[inline]
    fn abs(self) -> Decimal {
        Decimal::abs(&self)
    }
}

impl Signed for Decimal {
    #[inline]
    fn sign(&self) -> Sign {
        Decimal::sign(self)
    }
}

impl AbsEq for Decimal {
    #[inline]
    fn abs_eq(&self, rhs: &Self) -> bool {
        cmp_abs(&self.repr, &rhs.repr) == core::cmp::Ordering::Equal
    }
}

impl AbsOrd for Decimal {
    #[inline]
    fn abs_cmp(&self, rhs: &Self) -> core::cmp::Ordering {
        cmp_abs(&self.repr, &rhs.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_abs_trait_matches_inherent_method() {
        assert_eq!(Abs::abs(d("-5")), d("-5").abs());
    }

    #[test]
    fn test_signed_trait() {
        assert_eq!(d("-5").sign(), Sign::Negative);
        assert!(d("5").is_positive());
        assert!(d("-5").is_negative());
    }

    #[test]
    fn test_abs_eq() {
        assert!(d("-5").abs_eq(&d("5")));
        assert!(!d("-5").abs_eq(&d("5.1")));
    }

    #[test]
    fn test_abs_cmp() {
        assert!(d("-1.9").abs_cmp(&d("1.00003")).is_gt());
    }
}
