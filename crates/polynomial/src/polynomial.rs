// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomials used to produce and check shares.

use crate::lagrange::Point;
use num_bigint::BigInt;
use num_traits::Zero;

/// A polynomial represented by its coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// Evaluating it at `k` distinct x-coordinates yields shares from which
/// `a_0` can be reconstructed when `n = k - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in descending order of degree.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients in ascending order format.
    ///
    /// The first element is the constant term, i.e. the secret.
    ///
    /// # Arguments
    ///
    /// * `ascending_coefficients` - Vector of coefficients in ascending order.
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: BigInt) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of an empty polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns `a_0`, or zero for an empty polynomial.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.last().cloned().unwrap_or_default()
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in &self.coefficients {
            result = result * x + coeff;
        }
        result
    }

    /// Evaluates the polynomial at every x in `xs`, producing one share each.
    pub fn points<I>(&self, xs: I) -> Vec<Point>
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        xs.into_iter()
            .map(|x| {
                let x = x.into();
                let y = self.evaluate(&x);
                Point { x, y }
            })
            .collect()
    }
}
