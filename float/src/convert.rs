//! Conversions to and from machine integers, machine floats, and (behind
//! `bigint-interop`) the binary-radix `dashu-int`/`dashu-float` types
//! (spec.md §4.3.8).

use crate::error::DecimalConversionError as Error;
use crate::repr::{Context, Kind, Repr};
use crate::Decimal;
use decimal_base::Sign;
use decimal_nat::Nat;

impl Decimal {
    /// Convert to `i64`, requiring the value to be a finite integer that fits.
    pub fn to_i64(&self) -> Result<i64, Error> {
        match self.repr.kind {
            Kind::Infinite => Err(Error::Infinite),
            Kind::Zero => Ok(0),
            Kind::Finite => {
                if self.repr.exponent < 0 {
                    let (_, sticky) =
                        decimal_nat::shift_ops::shr(&self.repr.mantissa, (-self.repr.exponent) as u32);
                    if sticky {
                        return Err(Error::LossOfPrecision);
                    }
                    let whole =
                        decimal_nat::shift_ops::shr_trunc(&self.repr.mantissa, (-self.repr.exponent) as u32);
                    let magnitude = whole.to_u64().map_err(Error::from)?;
                    to_signed_i64(magnitude, self.repr.sign)
                } else {
                    let whole = decimal_nat::shift_ops::shl(&self.repr.mantissa, self.repr.exponent as u32);
                    let magnitude = whole.to_u64().map_err(Error::from)?;
                    to_signed_i64(magnitude, self.repr.sign)
                }
            }
        }
    }

    /// Build an exact `Decimal` from an `i64`, using `ctx` as its context.
    pub fn from_i64(v: i64, ctx: Context) -> Self {
        let sign = if v < 0 { Sign::Negative } else { Sign::Positive };
        let magnitude = v.unsigned_abs();
        Decimal::from_parts(Repr::finite(sign, Nat::from_u64(magnitude), 0), ctx)
    }

    /// Convert to `f64`. Not exact in general: decimal fractions like `0.1`
    /// aren't binary-representable, so this goes through text formatting and
    /// `f64::from_str` rather than pretending a lossless conversion exists.
    pub fn to_f64(&self) -> f64 {
        match self.repr.kind {
            Kind::Infinite if self.repr.sign == Sign::Negative => f64::NEG_INFINITY,
            Kind::Infinite => f64::INFINITY,
            Kind::Zero if self.repr.sign == Sign::Negative => -0.0,
            Kind::Zero => 0.0,
            Kind::Finite => alloc::format!("{}", self).parse().unwrap_or(f64::NAN),
        }
    }

    /// Build a `Decimal` from an `f64` by formatting it with Rust's own
    /// shortest round-tripping decimal representation and reparsing — the
    /// same indirect route `dashu_float`'s binary-to-decimal conversions take
    /// for "print exactly what the float means."
    pub fn from_f64(v: f64, ctx: Context) -> Result<Self, Error> {
        if v.is_nan() {
            crate::error::panic_invalid_operation("f64 NaN has no Decimal representation");
        }
        if v.is_infinite() {
            return Ok(Decimal::infinity(if v < 0.0 { Sign::Negative } else { Sign::Positive }, ctx));
        }
        let text = alloc::format!("{:e}", v);
        let repr = crate::parse::parse_decimal(&text).map_err(|_| Error::OutOfBounds)?;
        let (rounded, _) = ctx.round(repr);
        Ok(Decimal::from_parts(rounded, ctx))
    }
}

fn to_signed_i64(magnitude: u64, sign: Sign) -> Result<i64, Error> {
    if sign == Sign::Negative {
        if magnitude > i64::MAX as u64 + 1 {
            return Err(Error::OutOfBounds);
        }
        Ok((magnitude as i128 * -1) as i64)
    } else {
        i64::try_from(magnitude).map_err(|_| Error::OutOfBounds)
    }
}


#[cfg(feature = "bigint-interop")]
mod bigint_interop {
    use super::*;
    use dashu_float::FBig;
    use dashu_int::{IBig, UBig};

    impl Decimal {
        /// Convert the integer value (exponent `>= 0`, or exactly divisible)
        /// to a binary-radix `dashu_int::IBig`.
        pub fn to_ibig(&self) -> Result<IBig, Error> {
            match self.repr.kind {
                Kind::Infinite => Err(Error::Infinite),
                Kind::Zero => Ok(IBig::from(0)),
                Kind::Finite => {
                    let ubig = if self.repr.exponent >= 0 {
                        let scaled = decimal_nat::shift_ops::shl(&self.repr.mantissa, self.repr.exponent as u32);
                        scaled.to_ubig()
                    } else {
                        let (whole, sticky) =
                            decimal_nat::shift_ops::shr(&self.repr.mantissa, (-self.repr.exponent) as u32);
                        if sticky {
                            return Err(Error::LossOfPrecision);
                        }
                        whole.to_ubig()
                    };
                    let signed = IBig::from(ubig);
                    Ok(if self.repr.sign == Sign::Negative { -signed } else { signed })
                }
            }
        }

        /// Convert to a binary `dashu_float::FBig<RoundToZero, 10>`-shaped
        /// value by re-parsing the decimal text; `dashu_float` has no native
        /// radix-10 float type to convert into bit-for-bit, so going through
        /// its own decimal parser (which exists for exactly this purpose) is
        /// the faithful route rather than hand-rolling a base conversion.
        pub fn to_fbig(&self) -> FBig<dashu_float::round::mode::Zero, 2> {
            alloc::format!("{}", self)
                .parse()
                .expect("Decimal's own text format is accepted by dashu_float's parser")
        }
    }

}
