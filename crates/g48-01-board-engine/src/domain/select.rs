//! # Select Primitives
//!
//! Fixed-arity "select by predicate" helpers over `subtle`.
//!
//! Both alternatives are always computed by the caller; these helpers only
//! pick one of them without branching on the predicate.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Returns `when_true` if `predicate` is set, else `when_false`.
#[inline]
#[must_use]
pub fn select_u8(predicate: Choice, when_true: u8, when_false: u8) -> u8 {
    u8::conditional_select(&when_false, &when_true, predicate)
}

/// Returns `when_true` if `predicate` is set, else `when_false`.
#[inline]
#[must_use]
pub fn select_u64(predicate: Choice, when_true: u64, when_false: u64) -> u64 {
    u64::conditional_select(&when_false, &when_true, predicate)
}

/// `value == 0`
#[inline]
#[must_use]
pub fn is_zero(value: u8) -> Choice {
    value.ct_eq(&0)
}

/// `a == b`
#[inline]
#[must_use]
pub fn equals(a: u8, b: u8) -> Choice {
    a.ct_eq(&b)
}
