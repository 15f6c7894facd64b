// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positional decoding of digit strings in radix 2 through 36.

use crate::errors::InterpolationError;
use num_bigint::BigInt;
use num_traits::Zero;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix, using the symbols `0-9a-z`.
pub const MAX_BASE: u32 = 36;

/// Decodes a non-negative digit string written in `base` into a `BigInt`.
///
/// Digits are read left to right and accumulated as `acc * base + digit`.
/// Letters are accepted in either case. Signs, separators and any symbol whose
/// value is not below `base` are rejected.
///
/// # Errors
///
/// * `UnsupportedBase` if `base` is outside `2..=36`.
/// * `EmptyValue` if `digits` is empty.
/// * `InvalidDigit` for the first offending character.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, InterpolationError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(InterpolationError::UnsupportedBase { base: base.into() });
    }
    if digits.is_empty() {
        return Err(InterpolationError::EmptyValue);
    }

    let radix = BigInt::from(base);
    let mut acc = BigInt::zero();
    for c in digits.chars() {
        let digit = digit_value(c, base)?;
        acc = acc * &radix + digit;
    }
    Ok(acc)
}

fn digit_value(c: char, base: u32) -> Result<u32, InterpolationError> {
    // `to_digit(36)` maps 0-9 and both letter cases; `+`/`-` fall through as invalid.
    match c.to_digit(MAX_BASE) {
        Some(d) if d < base => Ok(d),
        _ => Err(InterpolationError::InvalidDigit { digit: c, base }),
    }
}
