//! Text parsing (spec.md §4.3.9). [`parse_decimal`] accepts the plain
//! decimal-literal shape used by `FromStr`/`serde`: an optional sign, an
//! integer part, an optional fractional part, and an optional `e`/`E`
//! exponent — plus the literals `inf`/`-inf` for signed infinity.
//! [`parse`] generalizes this to `Parse(s, base)`: base-0 auto-detects a
//! `0b`/`0o`/`0x` prefix (falling back to decimal with none), and an
//! explicit power-of-two base (`2`, `8`, `16`) accepts a `p`/`P` *binary*
//! exponent the way Go's hex float literals do, rather than `e`/`E` meaning
//! a power of the literal's own radix.
//!
//! A bare textual scanner/reader adapter (the `Scan`-style byte stream
//! interface) is out of scope; `FromStr`/`Parse`/`ParseDecimal` are the
//! supported entry points.

use crate::repr::{Context, Repr};
use crate::round::RoundingMode;
use crate::Decimal;
use decimal_base::{ParseError, Sign};
use decimal_nat::Nat;

/// Parse `s` as a plain base-10 decimal literal into an unrounded [`Repr`]
/// (the caller rounds to its own context's precision). Equivalent to
/// `parse(s, 10)`.
pub fn parse_decimal(s: &str) -> Result<Repr, ParseError> {
    parse(s, 10)
}

/// `Parse(s, base)`: parse `s` in the given `base` into an unrounded
/// [`Repr`]. `base == 0` auto-detects a `0b`/`0o`/`0x` prefix, defaulting to
/// decimal when none is present; otherwise `base` must be in `2..=62`.
pub fn parse(s: &str, base: u32) -> Result<Repr, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let (sign, rest) = match s.as_bytes()[0] {
        b'+' => (Sign::Positive, &s[1..]),
        b'-' => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    };

    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        return Ok(Repr::infinite(sign));
    }
    if rest.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let (effective_base, rest) = detect_base(rest, base)?;
    let mantissa_part = parse_mantissa_and_exponent(rest, effective_base)?;
    Ok(build_repr(sign, mantissa_part, effective_base)?)
}

/// `ParseDecimal(s, base, prec, mode)`: parse then round to `prec`
/// significant digits under `mode` in a single step.
pub fn parse_with_context(
    s: &str,
    base: u32,
    prec: u32,
    mode: RoundingMode,
) -> Result<Decimal, ParseError> {
    let repr = parse(s, base)?;
    let context = Context::new(prec, mode);
    let (rounded, accuracy) = context.round(repr);
    Ok(Decimal { repr: rounded, context, accuracy })
}

/// Strip a recognized base prefix when `base == 0`, returning the detected
/// base and the remaining text. A nonzero `base` is used verbatim (and must
/// be in `2..=62`); no prefix stripping happens in that case, matching
/// `Parse`'s contract that an explicit base is taken at face value.
fn detect_base(rest: &str, base: u32) -> Result<(u32, &str), ParseError> {
    if base != 0 {
        if !(2..=62).contains(&base) {
            return Err(ParseError::InvalidBase);
        }
        return Ok((base, rest));
    }
    let lower = rest.as_bytes();
    if lower.len() >= 2 && lower[0] == b'0' {
        match lower[1] {
            b'x' | b'X' => return Ok((16, &rest[2..])),
            b'o' | b'O' => return Ok((8, &rest[2..])),
            b'b' | b'B' => return Ok((2, &rest[2..])),
            _ => {}
        }
    }
    Ok((10, rest))
}

/// Binary exponent is only well-defined (and exactly decimal-representable)
/// for a power-of-two base; spec.md's `p`/`P` literals are for `0x`/`0o`/`0b`
/// prefixes specifically.
fn is_binary_exponent_base(base: u32) -> bool {
    matches!(base, 2 | 8 | 16)
}

struct MantissaParts {
    int_digits: alloc::string::String,
    frac_digits: alloc::string::String,
    exponent: i32,
}

fn parse_mantissa_and_exponent(rest: &str, base: u32) -> Result<MantissaParts, ParseError> {
    let exp_marker = if base == 10 {
        Some(('e', 'E'))
    } else if is_binary_exponent_base(base) {
        Some(('p', 'P'))
    } else {
        None
    };

    let (mantissa_part, exp_part) = match exp_marker {
        Some((lo, hi)) => match rest.find(|c: char| c == lo || c == hi) {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (rest, None),
        },
        None => (rest, None),
    };

    let (int_part, frac_part) = match mantissa_part.find('.') {
        Some(idx) => (&mantissa_part[..idx], Some(&mantissa_part[idx + 1..])),
        None => (mantissa_part, None),
    };

    let frac_part = frac_part.unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let exponent: i32 = match exp_part {
        Some(e) => e.parse().map_err(|_| ParseError::ExponentOverflow)?,
        None => 0,
    };

    Ok(MantissaParts {
        int_digits: strip_separators(int_part, base)?,
        frac_digits: strip_separators(frac_part, base)?,
        exponent,
    })
}

/// Base-0 (decimal) literals may use `_` between digits as a separator;
/// an explicit base takes the text at face value, with no separator support.
fn strip_separators(s: &str, base: u32) -> Result<alloc::string::String, ParseError> {
    if !s.contains('_') {
        return Ok(alloc::string::String::from(s));
    }
    if base != 10 {
        return Err(ParseError::InvalidSep);
    }
    let bytes = s.as_bytes();
    let mut out = alloc::string::String::with_capacity(s.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
            let next_digit = i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit();
            if !prev_digit || !next_digit {
                return Err(ParseError::InvalidSep);
            }
        } else {
            out.push(b as char);
        }
    }
    Ok(out)
}

fn build_repr(sign: Sign, parts: MantissaParts, base: u32) -> Result<Repr, ParseError> {
    let frac_len = parts.frac_digits.len() as u32;
    let mut combined = alloc::string::String::with_capacity(parts.int_digits.len() + parts.frac_digits.len());
    combined.push_str(&parts.int_digits);
    combined.push_str(&parts.frac_digits);
    if combined.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let mantissa = decimal_nat::parse::parse_radix_digits(&combined, base)?;
    if mantissa.is_zero() {
        return Ok(Repr::signed_zero(sign));
    }

    if base == 10 {
        // `e`/`E` is a power of 10, so the fractional point shift and the
        // exponent combine directly into the decimal exponent.
        let exponent = parts.exponent - frac_len as i32;
        return Ok(Repr::finite(sign, mantissa, exponent));
    }

    // `base` is a power of two: the literal's own radix point is worth
    // `base^-frac_len`, and `p`/`P` is worth `2^exponent`; both of these are
    // exact decimal fractions, so no rounding is needed to land in `Repr`.
    let base_log2 = base.trailing_zeros() as i64;
    let total_pow2 = parts.exponent as i64 - base_log2 * frac_len as i64;
    let (factor, exp_shift) = pow2_as_decimal(total_pow2)?;
    let scaled = decimal_nat::mul_ops::mul(&mantissa, &factor);
    Ok(Repr::finite(sign, scaled, exp_shift))
}

/// `2^n` as `multiplier * 10^exp_shift`, exactly: `2^n` for `n >= 0`,
/// `5^(-n) * 10^n` for `n < 0` (since `5^k * 2^k = 10^k`).
fn pow2_as_decimal(n: i64) -> Result<(Nat, i32), ParseError> {
    let magnitude = n.unsigned_abs();
    let exp = i32::try_from(if n < 0 { n } else { 0 }).map_err(|_| ParseError::ExponentOverflow)?;
    if n >= 0 {
        let limit = u32::try_from(magnitude).map_err(|_| ParseError::ExponentOverflow)?;
        Ok((pow_word(2, limit), 0))
    } else {
        let limit = u32::try_from(magnitude).map_err(|_| ParseError::ExponentOverflow)?;
        Ok((pow_word(5, limit), exp))
    }
}

/// `base^exp` by repeated squaring.
fn pow_word(base: decimal_nat::word::Word, exp: u32) -> Nat {
    let mut result = Nat::from_word(1);
    let mut b = Nat::from_word(base);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = decimal_nat::mul_ops::mul(&result, &b);
        }
        b = decimal_nat::mul_ops::sqr(&b);
        e >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let r = parse_decimal("123").unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(123));
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_parse_fraction() {
        let r = parse_decimal("1.5").unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(15));
        assert_eq!(r.exponent, -1);
    }

    #[test]
    fn test_parse_exponent() {
        let r = parse_decimal("1.5e3").unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(15));
        assert_eq!(r.exponent, 2);
    }

    #[test]
    fn test_parse_negative() {
        let r = parse_decimal("-2.5").unwrap();
        assert_eq!(r.sign, Sign::Negative);
    }

    #[test]
    fn test_parse_negative_zero_keeps_sign() {
        let r = parse_decimal("-0").unwrap();
        assert!(r.is_zero());
        assert_eq!(r.sign, Sign::Negative);
    }

    #[test]
    fn test_parse_infinity() {
        let r = parse_decimal("-inf").unwrap();
        assert!(r.is_infinite());
        assert_eq!(r.sign, Sign::Negative);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(parse_decimal(""), Err(ParseError::NoDigits));
    }

    #[test]
    fn test_parse_bad_exponent() {
        assert_eq!(parse_decimal("1e"), Err(ParseError::ExponentOverflow));
    }

    #[test]
    fn test_parse_underscore_separator() {
        let r = parse(&"1_000_000", 0).unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(1));
        assert_eq!(r.exponent, 6);
    }

    #[test]
    fn test_parse_hex_prefix_autodetect() {
        let r = parse("0xff", 0).unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(255));
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_parse_binary_prefix_autodetect() {
        let r = parse("0b1010", 0).unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(10));
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_parse_octal_prefix_autodetect() {
        let r = parse("0o17", 0).unwrap();
        assert_eq!(r.mantissa, Nat::from_u64(15));
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_parse_hex_float_with_binary_exponent() {
        // 0x1.8p1 == 1.5 * 2 == 3
        let r = parse("0x1.8p1", 0).unwrap();
        let decimal = Decimal::from_parts(r, Context::default());
        assert_eq!(decimal, "3".parse().unwrap());
    }

    #[test]
    fn test_parse_negative_hex_float_matches_f64_max() {
        // spec concrete scenario: -0x1.fffffffffffffp1023 is f64::MAX, negated.
        let r = parse("-0x1.fffffffffffffp1023", 0).unwrap();
        let decimal = Decimal::from_parts(r, Context::default());
        assert!(decimal.repr.is_negative());
        let approx = decimal.to_f64();
        assert_eq!(approx, -f64::MAX);
    }

    #[test]
    fn test_parse_with_context_rounds() {
        let d = parse_with_context("1.23456", 10, 3, RoundingMode::ToNearestEven).unwrap();
        assert_eq!(d.digits(), 3);
    }

    #[test]
    fn test_parse_rejects_invalid_base() {
        assert_eq!(parse("1", 63), Err(ParseError::InvalidBase));
    }
}
