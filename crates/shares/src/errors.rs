// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sr_polynomial::InterpolationError;
use thiserror::Error;

/// Errors raised while reading a share document or reconstructing from it.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The input is not a JSON object of the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// `keys.k` is absent
    #[error("Invalid JSON: missing keys.k")]
    MissingThreshold,

    /// A share key that is not a non-negative decimal integer
    #[error("Invalid share label '{label}': expected a non-negative decimal integer")]
    InvalidLabel { label: String },

    /// A share entry without `base` or `value`, or with values of the wrong type
    #[error("Malformed share '{label}': {reason}")]
    MalformedEntry { label: String, reason: String },

    /// A `base` field that is not an integer
    #[error("Invalid base '{base}' for share '{label}'")]
    InvalidBase { label: String, base: String },

    /// A share whose base or value cannot be decoded
    #[error("Share '{label}': {source}")]
    InvalidShare {
        label: String,
        #[source]
        source: InterpolationError,
    },

    /// Failure while selecting or interpolating points
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
