//! Error types.

use core::fmt::{self, Display, Formatter};

/// Number out of bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionError {
    /// The number is not in the representation range
    OutOfBounds,
    /// The conversion will cause a loss of precision
    LossOfPrecision
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConversionError::OutOfBounds => f.write_str("number out of bounds"),
            ConversionError::LossOfPrecision => f.write_str("number can't be converted losslessly"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Error parsing a number from text.
///
/// Shared by `decimal-nat`'s bare-natural scanner and `decimal-float`'s
/// `Decimal` parser; the latter produces every variant, the former only
/// ever produces [NoDigits][ParseError::NoDigits],
/// [InvalidDigit][ParseError::InvalidDigit] and
/// [InvalidSep][ParseError::InvalidSep].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No digits in the string (or in the mantissa).
    NoDigits,
    /// Invalid digit for a given radix.
    InvalidDigit,
    /// The radix is not supported.
    UnsupportedRadix,
    /// An underscore separator was not between two digits.
    InvalidSep,
    /// Trailing characters after a value that should have consumed the
    /// whole string.
    ExpectedEnd,
    /// The exponent, after a valid run of digits, doesn't fit in the
    /// exponent type.
    ExponentOverflow,
    /// The string isn't shaped like any recognized numeric literal.
    UnrecognizedFormat,
    /// The requested base is outside `2..=62`.
    InvalidBase,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseError::NoDigits => f.write_str("no digits"),
            ParseError::InvalidDigit => f.write_str("invalid digit"),
            ParseError::UnsupportedRadix => f.write_str("unsupported radix"),
            ParseError::InvalidSep => f.write_str("misplaced separator"),
            ParseError::ExpectedEnd => f.write_str("trailing characters after the number"),
            ParseError::ExponentOverflow => f.write_str("exponent out of range"),
            ParseError::UnrecognizedFormat => f.write_str("unrecognized number format"),
            ParseError::InvalidBase => f.write_str("base must be 0 or in 2..=62"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
