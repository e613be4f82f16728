//! Re-exports the shared parse/conversion error types; `decimal-nat` itself
//! defines no error variants of its own.

pub use decimal_base::{ConversionError, ParseError};
