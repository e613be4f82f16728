//! Common trait and error definitions shared by the `decimal-nat` and
//! `decimal-float` crates.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate core;

pub mod error;
pub mod sign;

pub use error::*;
pub use sign::*;
