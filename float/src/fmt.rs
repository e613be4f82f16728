//! Text formatting (spec.md §4.3.9): `Text`/`Append`/`Format`-style output
//! with the `'e'/'E'`, `'f'`, `'g'/'G'`, `'b'`, and `'p'` specifiers, plus
//! the `Display` impl used for the default (`'g'`) rendering.
//!
//! Follows `dashu_float`'s split between a cheap `Display` and a richer
//! formatting entry point: `Display` stays a thin wrapper around
//! [`Decimal::text`] with the default spec.md-recommended format/precision,
//! and the specifier logic lives here rather than in `fmt::Formatter` flag
//! plumbing, since this crate doesn't need `{:.*}`-style `std::fmt` nesting.

use crate::repr::{Context, Kind};
use crate::round::{round, RoundingMode};
use crate::Decimal;
use alloc::string::String;
use core::fmt;
use decimal_base::Sign;
use decimal_nat::Nat;

/// Exponents (of the most significant digit) outside `[-6, 21)` switch to
/// scientific notation under `'g'`/`'G'`, mirroring the threshold most
/// decimal libraries (and `dashu_float`) use to avoid a wall of zeros either
/// way.
const LOWER_SCI_THRESHOLD: i32 = -6;
const UPPER_SCI_THRESHOLD: i32 = 21;

impl Decimal {
    /// `Text(fmt, prec)`: render as a `String` under the given format
    /// specifier. `prec < 0` means "shortest round-tripping representation";
    /// since a [`Repr`](crate::repr::Repr)'s mantissa is already trimmed of
    /// trailing zeros ([`crate::repr::Repr::dnorm`]), the digits already
    /// stored *are* that shortest representation, so `prec < 0` is simply
    /// "don't round before printing."
    pub fn text(&self, format: char, prec: i32) -> String {
        let mut out = String::new();
        self.append(&mut out, format, prec);
        out
    }

    /// `Append(buf, fmt, prec)`: same as [`Decimal::text`] but appending into
    /// a caller-owned buffer instead of allocating a fresh `String`.
    pub fn append(&self, buf: &mut String, format: char, prec: i32) {
        if self.repr.sign == Sign::Negative {
            buf.push('-');
        }
        match self.repr.kind {
            Kind::Infinite => buf.push_str("inf"),
            Kind::Zero => append_zero(buf, format, prec),
            Kind::Finite => append_finite(buf, self, format, prec),
        }
    }
}

fn append_zero(buf: &mut String, format: char, prec: i32) {
    match canonical_format(format) {
        'e' => {
            buf.push('0');
            if prec > 0 {
                buf.push('.');
                for _ in 0..prec {
                    buf.push('0');
                }
            }
            buf.push('e');
            push_signed_exponent(buf, 0);
        }
        'b' => buf.push_str("0e0"),
        'p' => buf.push_str("0.0e0"),
        _ => buf.push('0'),
    }
}

/// Normalize the handful of aliases spec.md's `Format` accepts (`'F'`,
/// `'s'`, `'v'`) down to their canonical specifier.
fn canonical_format(format: char) -> char {
    match format {
        'F' => 'f',
        's' | 'v' => 'g',
        other => other,
    }
}

fn append_finite(buf: &mut String, d: &Decimal, format: char, prec: i32) {
    match canonical_format(format) {
        'e' | 'E' => {
            let upper = format == 'E';
            let (digits, exp) = digits_for_exponential(d, prec);
            push_exponential(buf, &digits, exp, upper);
        }
        'f' => {
            let (digits, point_exp) = digits_for_fixed(d, prec);
            push_fixed(buf, &digits, point_exp);
        }
        'g' | 'G' => {
            let upper = format == 'G';
            let digit_exp = d.repr.digit_exponent();
            if digit_exp < LOWER_SCI_THRESHOLD || digit_exp > UPPER_SCI_THRESHOLD {
                let (digits, exp) = digits_for_exponential(d, prec);
                let (digits, _) = trim_trailing_zeros(&digits);
                push_exponential(buf, &digits, exp, upper);
            } else {
                let (digits, point_exp) = digits_for_fixed(d, prec);
                let (digits, removed) = trim_trailing_zeros(&digits);
                push_fixed(buf, &digits, point_exp + removed as i32);
            }
        }
        'b' => {
            buf.push_str(&alloc::format!("{}", d.repr.mantissa));
            buf.push('e');
            buf.push_str(&alloc::format!("{}", d.repr.exponent));
        }
        'p' => {
            // Normalized-fraction form: `0.ddd` times `10^digit_exponent`.
            let digits = alloc::format!("{}", d.repr.mantissa);
            buf.push_str("0.");
            buf.push_str(&digits);
            buf.push('e');
            buf.push_str(&alloc::format!("{}", d.repr.digit_exponent()));
        }
        _ => {
            let (digits, point_exp) = digits_for_fixed(d, -1);
            push_fixed(buf, &digits, point_exp);
        }
    }
}

/// Round (or zero-pad) `d`'s mantissa to exactly `prec + 1` significant
/// digits (the digit before the point plus `prec` after it) for
/// `'e'`-style rendering. Returns the digit string and the exponent of its
/// leading digit.
fn digits_for_exponential(d: &Decimal, prec: i32) -> (String, i32) {
    let digit_exp = d.repr.digit_exponent() - 1;
    if prec < 0 {
        return (alloc::format!("{}", d.repr.mantissa), digit_exp);
    }
    let target_sig_digits = prec as u32 + 1;
    let digits = mantissa_digits(&d.repr.mantissa);
    let current = digits.len() as u32;
    if target_sig_digits >= current {
        let mut padded = digits;
        for _ in 0..(target_sig_digits - current) {
            padded.push('0');
        }
        return (padded, digit_exp);
    }
    let drop = current - target_sig_digits;
    let (rounded, _) = round(&d.repr.mantissa, drop, d.context.rounding, d.repr.is_negative());
    let carried = rounded.digits() as u32 > target_sig_digits;
    let exp = if carried { digit_exp + 1 } else { digit_exp };
    (alloc::format!("{}", rounded), exp)
}

/// Round (or zero-pad) `d`'s mantissa so its decimal point lands `prec`
/// digits in from the right (the fixed-point `'f'` contract). Returns the
/// digit string and the power-of-ten place of its rightmost digit.
fn digits_for_fixed(d: &Decimal, prec: i32) -> (String, i32) {
    if prec < 0 {
        return (alloc::format!("{}", d.repr.mantissa), d.repr.exponent);
    }
    let target_exponent = -prec;
    let drop = target_exponent - d.repr.exponent;
    if drop == 0 {
        (alloc::format!("{}", d.repr.mantissa), d.repr.exponent)
    } else if drop < 0 {
        // The requested scale keeps more digits than are stored: pad with
        // exact (non-rounded) trailing zeros rather than rounding.
        let mut digits = alloc::format!("{}", d.repr.mantissa);
        for _ in 0..(-drop) {
            digits.push('0');
        }
        (digits, target_exponent)
    } else {
        let (mantissa, _) =
            round(&d.repr.mantissa, drop as u32, d.context.rounding, d.repr.is_negative());
        (alloc::format!("{}", mantissa), target_exponent)
    }
}

fn mantissa_digits(mantissa: &Nat) -> String {
    alloc::format!("{}", mantissa)
}

fn push_signed_exponent(buf: &mut String, exp: i32) {
    if exp >= 0 {
        buf.push('+');
    } else {
        buf.push('-');
    }
    let magnitude = alloc::format!("{}", exp.unsigned_abs());
    if magnitude.len() < 2 {
        buf.push('0');
    }
    buf.push_str(&magnitude);
}

fn push_exponential(buf: &mut String, digits: &str, exp: i32, upper: bool) {
    buf.push_str(&digits[..1]);
    if digits.len() > 1 {
        buf.push('.');
        buf.push_str(&digits[1..]);
    }
    buf.push(if upper { 'E' } else { 'e' });
    push_signed_exponent(buf, exp);
}

fn push_fixed(buf: &mut String, digits: &str, point_exp: i32) {
    if point_exp >= 0 {
        buf.push_str(digits);
        for _ in 0..point_exp {
            buf.push('0');
        }
    } else {
        let point_from_end = (-point_exp) as usize;
        if point_from_end >= digits.len() {
            buf.push_str("0.");
            for _ in 0..(point_from_end - digits.len()) {
                buf.push('0');
            }
            buf.push_str(digits);
        } else {
            let split = digits.len() - point_from_end;
            buf.push_str(&digits[..split]);
            buf.push('.');
            buf.push_str(&digits[split..]);
        }
    }
}

/// Strip trailing `'0'` digits, returning the trimmed digit string and how
/// many were removed (callers adjust the associated exponent/point position
/// by that count — this function itself doesn't know which convention the
/// caller is using, fixed-point or exponential).
fn trim_trailing_zeros(digits: &str) -> (String, usize) {
    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        (String::from("0"), digits.len().saturating_sub(1))
    } else {
        (String::from(trimmed), digits.len() - trimmed.len())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text('g', -1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn with_mode(s: &str, mode: RoundingMode) -> Decimal {
        let repr = crate::parse::parse_decimal(s).unwrap();
        Decimal::from_parts(repr, Context::new(0, mode))
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(alloc::format!("{}", d("123.45")), "123.45");
        assert_eq!(alloc::format!("{}", d("0.001")), "0.001");
        assert_eq!(alloc::format!("{}", d("-5")), "-5");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(alloc::format!("{}", d("0")), "0");
    }

    #[test]
    fn test_display_negative_zero() {
        let neg_zero = Decimal::from_parts(
            crate::repr::Repr::signed_zero(Sign::Negative),
            Context::default(),
        );
        assert_eq!(alloc::format!("{}", neg_zero), "-0");
    }

    #[test]
    fn test_display_infinity() {
        let ctx = Default::default();
        assert_eq!(alloc::format!("{}", Decimal::infinity(Sign::Positive, ctx)), "inf");
        assert_eq!(alloc::format!("{}", Decimal::infinity(Sign::Negative, ctx)), "-inf");
    }

    #[test]
    fn test_display_scientific_for_large_exponent() {
        let s = alloc::format!("{}", d("1e30"));
        assert!(s.contains('e'));
    }

    #[test]
    fn test_roundtrip_parse_display() {
        for s in ["123.456", "0.0001", "-9.99", "1000000"] {
            assert_eq!(alloc::format!("{}", d(s)), s);
        }
    }

    #[test]
    fn test_text_e_format_matches_spec_scenario() {
        // SetInt(12345678901234567890000000000000000000).Text('e', 5)
        let d: Decimal = "12345678901234567890000000000000000000".parse().unwrap();
        assert_eq!(d.text('e', 5), "1.23457e+37");
    }

    #[test]
    fn test_text_g_negative_prec_is_shortest() {
        let sum = &d("0.1") + &d("0.11");
        assert_eq!(sum.text('g', -1), "0.21");
    }

    #[test]
    fn test_text_f_no_exponent() {
        assert_eq!(d("123.456").text('f', 1), "123.5");
        assert_eq!(d("0.0001").text('f', 2), "0.00");
    }

    #[test]
    fn test_text_b_integer_mantissa_and_exponent() {
        assert_eq!(d("1.5").text('b', 0), "15e-1");
    }

    #[test]
    fn test_text_p_normalized_fraction() {
        assert_eq!(d("123").text('p', 0), "0.123e3");
    }

    #[test]
    fn test_text_aliases() {
        assert_eq!(d("1.5").text('F', 0), d("1.5").text('f', 0));
        assert_eq!(d("1.5").text('v', -1), d("1.5").text('g', -1));
    }

    #[test]
    fn test_text_f_rounds_below_stored_scale_to_zero() {
        assert_eq!(with_mode("0.0001", RoundingMode::ToNearestEven).text('f', 1), "0.0");
    }

    #[test]
    fn test_text_f_pads_zeros_past_stored_precision() {
        assert_eq!(d("5").text('f', 3), "5.000");
    }

    #[test]
    fn test_text_e_pads_zeros_past_stored_precision() {
        assert_eq!(d("5").text('e', 3), "5.000e+00");
    }
}
