// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Exact Secret Reconstruction
//!
//! Recovers the constant term of an unknown integer polynomial of degree `k - 1`
//! from `k` of its sample points, the reconstruction step of threshold secret
//! sharing.
//!
//! ## Features
//!
//! - Uses `num-bigint` for every coordinate, so share values of any size are exact.
//! - Base decoding: share values written in any radix from 2 to 36.
//! - Rational arithmetic: normalized fractions closed under addition and multiplication.
//! - Lagrange interpolation at zero with an integrality check on the result.
//! - Serialization: optional serde support for [`DuplicatePolicy`].
//!
//! ## Example
//!
//! ```
//! use num_bigint::BigInt;
//! use sr_polynomial::{interpolate_at_zero, Point};
//!
//! let shares = vec![
//!     Point::from_share("1", 10, "4").unwrap(),
//!     Point::from_share("2", 2, "111").unwrap(),
//!     Point::from_share("3", 16, "c").unwrap(),
//! ];
//! assert_eq!(interpolate_at_zero(&shares, 3).unwrap(), BigInt::from(3));
//! ```

pub mod base;
pub mod errors;
pub mod lagrange;
pub mod polynomial;
pub mod rational;
pub mod utils;

pub use base::decode;
pub use errors::InterpolationError;
pub use lagrange::{
    interpolate_at_zero, lagrange_at_zero, select_points, DuplicatePolicy, Interpolator, Point,
};
pub use polynomial::Polynomial;
pub use rational::Rational;
pub use utils::*;
