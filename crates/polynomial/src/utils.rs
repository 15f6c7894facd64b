// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for big integer arithmetic.

use crate::base::decode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Divides `numerator` by `denominator` when the division is exact.
///
/// Uses truncated division, so the quotient of a negative numerator is
/// negative. Returns `None` when the remainder is non-zero or the denominator
/// is zero.
///
/// # Arguments
///
/// * `numerator` - The dividend.
/// * `denominator` - The divisor.
pub fn exact_quotient(numerator: &BigInt, denominator: &BigInt) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }
    let (quotient, remainder) = numerator.div_rem(denominator);
    remainder.is_zero().then_some(quotient)
}

/// Parses a share label as a non-negative decimal integer.
///
/// Only ASCII digits are accepted, so `"+1"`, `"-1"`, `"1.0"` and `""` all yield
/// `None`.
pub fn parse_label(label: &str) -> Option<BigInt> {
    decode(label, 10).ok()
}
