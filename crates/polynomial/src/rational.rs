// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact fractions over `BigInt`.

use crate::errors::InterpolationError;
use crate::utils::exact_quotient;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A normalized fraction `num / den`.
///
/// Every value is kept in lowest terms with a strictly positive denominator, so
/// two rationals are equal exactly when their fields are equal. Zero is always
/// represented as `0 / 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Rational {
    /// Creates the rational `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, InterpolationError> {
        if denominator.is_zero() {
            return Err(InterpolationError::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Creates the rational `value / 1`.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            num: value,
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Adds two rationals.
    ///
    /// `a/b + c/d = (a*d + c*b) / (b*d)`, then reduced.
    pub fn add(&self, other: &Self) -> Self {
        Self::normalized(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }

    /// Multiplies two rationals.
    ///
    /// `a/b * c/d = (a*c) / (b*d)`, then reduced.
    pub fn mul(&self, other: &Self) -> Self {
        Self::normalized(&self.num * &other.num, &self.den * &other.den)
    }

    /// Converts the value into an integer.
    ///
    /// A denominator of one yields the numerator directly. Otherwise the
    /// numerator must divide exactly by the denominator.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::NonIntegerResult` when the division leaves a
    /// non-zero remainder.
    pub fn into_integer(self) -> Result<BigInt, InterpolationError> {
        if self.den.is_one() {
            return Ok(self.num);
        }
        exact_quotient(&self.num, &self.den).ok_or(InterpolationError::NonIntegerResult {
            numerator: self.num,
            denominator: self.den,
        })
    }

    /// Reduces a fraction whose denominator is known to be non-zero.
    fn normalized(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        // gcd(0, 0) is 0 and must not be divided by.
        let g = num.gcd(&den);
        if !g.is_zero() && !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }
}
