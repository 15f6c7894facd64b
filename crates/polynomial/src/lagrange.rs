// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Secret reconstruction by Lagrange interpolation at `x = 0`.
//!
//! Given `k` points of a polynomial of degree `k - 1`, the constant term is
//!
//! `f(0) = Σ_i y_i · Π_{j≠i} (-x_j) / (x_i - x_j)`
//!
//! Every product and sum is carried out over [`Rational`] so the result is exact
//! regardless of the magnitude of the coordinates.

use crate::base::decode;
use crate::errors::InterpolationError;
use crate::rational::Rational;
use num_bigint::BigInt;
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One share: the x-coordinate is the share index, y the share value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Builds a point from a decimal label and a value written in `base`.
    ///
    /// # Errors
    ///
    /// * `InvalidDigit` if the label is not a non-negative decimal integer or the
    ///   value contains a symbol outside `base`.
    /// * `UnsupportedBase` if `base` is outside `2..=36`.
    pub fn from_share(label: &str, base: u32, value: &str) -> Result<Self, InterpolationError> {
        let x = decode(label, 10)?;
        let y = decode(value, base)?;
        Ok(Self { x, y })
    }
}

/// How coinciding x-coordinates among the selected points are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DuplicatePolicy {
    /// Check uniqueness before any arithmetic and fail with `DuplicateAbscissa`.
    #[default]
    Reject,
    /// Let the zero denominator surface as `DivisionByZero` during interpolation.
    Reactive,
}

/// Picks the `k` points with the smallest x-coordinates.
///
/// Points are sorted by ascending x with a stable sort, so the selection is
/// reproducible for a given input.
///
/// # Errors
///
/// * `InvalidThreshold` when `k` is zero.
/// * `InsufficientPoints` when fewer than `k` points are available.
pub fn select_points(points: &[Point], k: usize) -> Result<Vec<Point>, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold { k });
    }
    if points.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            have: points.len(),
            need: k,
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x));
    let dropped = sorted.split_off(k);

    debug!(
        selected = ?sorted.iter().map(|p| p.x.to_string()).collect::<Vec<_>>(),
        dropped = ?dropped.iter().map(|p| p.x.to_string()).collect::<Vec<_>>(),
        "Selected points for interpolation"
    );

    Ok(sorted)
}

/// Sums the Lagrange terms of `points` evaluated at zero.
///
/// Uses every point given. The result is the exact rational value of the
/// interpolating polynomial at the origin.
///
/// # Errors
///
/// Returns `DivisionByZero` if two points share an x-coordinate.
pub fn lagrange_at_zero(points: &[Point]) -> Result<Rational, InterpolationError> {
    let mut sum = Rational::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut term = Rational::from_integer(pi.y.clone());
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let basis = Rational::new(-&pj.x, &pi.x - &pj.x)?;
            term = term.mul(&basis);
        }
        trace!(i, x = %pi.x, term = %term, "Lagrange term");
        sum = sum.add(&term);
    }
    Ok(sum)
}

/// Reconstructs constant terms from shares.
#[derive(Clone, Debug, Default)]
pub struct Interpolator {
    duplicates: DuplicatePolicy,
}

impl Interpolator {
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self { duplicates }
    }

    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Selects `k` points and returns the integer value at zero of the
    /// polynomial through them.
    ///
    /// # Errors
    ///
    /// * `InvalidThreshold` / `InsufficientPoints` from selection.
    /// * `DuplicateAbscissa` if the selection contains a repeated x and the
    ///   policy is `Reject`; `DivisionByZero` in the same case under `Reactive`.
    /// * `NonIntegerResult` if the points do not lie on a polynomial of degree
    ///   `k - 1` with an integer value at zero.
    #[instrument(skip_all, fields(k = k))]
    pub fn interpolate_at_zero(
        &self,
        points: &[Point],
        k: usize,
    ) -> Result<BigInt, InterpolationError> {
        let selected = select_points(points, k)?;

        if self.duplicates == DuplicatePolicy::Reject {
            if let Some(x) = first_duplicate(&selected) {
                return Err(InterpolationError::DuplicateAbscissa { x: x.clone() });
            }
        }

        let value = lagrange_at_zero(&selected)?;
        debug!(value = %value, "Interpolated value at zero");
        value.into_integer()
    }
}

/// Reconstructs the secret from the `k` shares with the smallest x-coordinates,
/// rejecting repeated x-coordinates up front.
pub fn interpolate_at_zero(points: &[Point], k: usize) -> Result<BigInt, InterpolationError> {
    Interpolator::default().interpolate_at_zero(points, k)
}

fn first_duplicate(points: &[Point]) -> Option<&BigInt> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().map(|p| &p.x).find(|x| !seen.insert(*x))
}
