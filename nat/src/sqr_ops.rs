//! Squaring; re-exported from `mul_ops` since a dedicated symmetric-product
//! fast path isn't implemented (see `DESIGN.md`).

pub use crate::mul_ops::sqr;
