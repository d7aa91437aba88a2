//! ALU logical and comparison operations.
//!
//! Implements bitwise AND and the unsigned three-way comparison behind `CMP`.

use std::cmp::Ordering;

/// Bitwise AND of two register values.
pub const fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// Unsigned comparison of `a` against `b`.
pub fn compare(a: u8, b: u8) -> Ordering {
    a.cmp(&b)
}
