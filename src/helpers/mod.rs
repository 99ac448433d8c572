//! Helper Utilities
//!
//! Common utilities used across the crate.

mod number;

pub use number::*;
