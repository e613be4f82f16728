//! Errors and panics.
//!
//! Spec.md excludes a first-class NaN representation: operations that would
//! produce one (`0/0`, `inf - inf`, `sqrt` of a negative number) panic
//! instead, the same contract `dashu_float::FBig`'s docs describe ("FBig
//! doesn't support NaN values ... methods will panic instead").

use core::fmt;

#[cold]
pub(crate) fn panic_invalid_operation(what: &str) -> ! {
    panic!("decimal: invalid operation ({what}) has no representable result")
}

#[cold]
pub(crate) fn panic_division_by_zero() -> ! {
    panic!("decimal: division by zero")
}

/// Failure converting a [`crate::Decimal`] to another numeric type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecimalConversionError {
    /// The value doesn't fit (e.g. an infinity converted to a finite integer).
    OutOfBounds,
    /// The value fits but isn't exactly representable (e.g. `1.5` to `i64`).
    LossOfPrecision,
    /// The source is a signed infinity; some target types have no analogue.
    Infinite,
}

impl fmt::Display for DecimalConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("number too large or small for the target type"),
            Self::LossOfPrecision => f.write_str("conversion requires rounding"),
            Self::Infinite => f.write_str("infinity has no representation in the target type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecimalConversionError {}

impl From<decimal_base::ConversionError> for DecimalConversionError {
    fn from(e: decimal_base::ConversionError) -> Self {
        match e {
            decimal_base::ConversionError::OutOfBounds => Self::OutOfBounds,
            decimal_base::ConversionError::LossOfPrecision => Self::LossOfPrecision,
        }
    }
}
