// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for decoding and interpolation.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while decoding shares or reconstructing a secret.
///
/// Every variant is terminal for a single reconstruction call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// Radix outside of `2..=36`
    #[error("Unsupported base: {base}")]
    UnsupportedBase { base: BigInt },

    /// A character that is not a digit of the declared base, including sign characters
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A value with no digits at all
    #[error("Empty digit string")]
    EmptyValue,

    /// The threshold must be at least one
    #[error("Invalid threshold: k must be positive, got {k}")]
    InvalidThreshold { k: usize },

    /// Fewer points than the threshold
    #[error("Not enough points to interpolate: have {have}, need {need}")]
    InsufficientPoints { have: usize, need: usize },

    /// A rational was constructed with a zero denominator
    #[error("Division by zero")]
    DivisionByZero,

    /// Two selected points share the same x-coordinate
    #[error("Duplicate x-coordinate among selected points: {x}")]
    DuplicateAbscissa { x: BigInt },

    /// The interpolated value at zero is not an integer
    #[error("Result is not an integer: {numerator}/{denominator}")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}
