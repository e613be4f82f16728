//! `serde` support, gated the same way `dashu_float`'s `third_party::serde`
//! module is: serialize/deserialize through the decimal text form rather
//! than the raw mantissa/exponent fields, so the wire format is stable
//! across internal representation changes.

use crate::repr::Context;
use crate::Decimal;
use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a decimal number string")
    }

    fn visit_str<E: DeError>(self, v: &str) -> Result<Decimal, E> {
        let repr = crate::parse::parse_decimal(v).map_err(|e| E::custom(alloc::format!("{e}")))?;
        let context = Context::default();
        let (rounded, accuracy) = context.round(repr);
        Ok(Decimal { repr: rounded, context, accuracy })
    }

    fn visit_string<E: DeError>(self, v: alloc::string::String) -> Result<Decimal, E> {
        self.visit_str(&v)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let d: Decimal = "123.456".parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
