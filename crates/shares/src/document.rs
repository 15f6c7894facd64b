// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::ShareError;
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use sr_polynomial::{
    base::{MAX_BASE, MIN_BASE},
    utils::parse_label,
    InterpolationError, Interpolator, Point,
};
use tracing::{info, warn};

const KEYS: &str = "keys";

/// The `keys` section of a share document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Keys {
    /// Total number of shares issued. Informational only.
    #[serde(default)]
    pub n: Option<usize>,
    /// Number of shares required to reconstruct the secret.
    pub k: usize,
}

/// A radix written either as a JSON string (`"16"`) or a JSON number (`16`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Base {
    Number(Number),
    Text(String),
}

impl Base {
    /// Reads the radix of the share labelled `label`.
    ///
    /// Anything that is not an integer is an `InvalidBase`. An integer of any
    /// size or sign outside `2..=36` is an `UnsupportedBase`.
    fn to_radix(&self, label: &str) -> Result<u32, ShareError> {
        let text = match self {
            Base::Number(n) => n.to_string(),
            Base::Text(s) => s.trim().to_string(),
        };
        let base: BigInt = text.parse().map_err(|_| ShareError::InvalidBase {
            label: label.to_string(),
            base: self.to_string(),
        })?;
        match u32::try_from(&base) {
            Ok(radix) if (MIN_BASE..=MAX_BASE).contains(&radix) => Ok(radix),
            _ => Err(ShareError::InvalidShare {
                label: label.to_string(),
                source: InterpolationError::UnsupportedBase { base },
            }),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base::Number(n) => write!(f, "{n}"),
            Base::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single share as written in the document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareEntry {
    pub base: Base,
    pub value: String,
}

/// A parsed share document.
#[derive(Clone, Debug)]
pub struct ShareDocument {
    keys: Keys,
    entries: Map<String, Value>,
}

impl ShareDocument {
    /// Parses a share document from JSON text.
    ///
    /// # Errors
    ///
    /// * `Json` if the text is not a JSON object or `keys` is malformed.
    /// * `MissingThreshold` if `keys.k` is absent.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        let mut entries: Map<String, Value> = serde_json::from_str(json)?;
        let keys = match entries.remove(KEYS) {
            Some(keys) if keys.get("k").is_some() => serde_json::from_value::<Keys>(keys)?,
            _ => return Err(ShareError::MissingThreshold),
        };
        Ok(Self { keys, entries })
    }

    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// Decodes every share entry into a point.
    ///
    /// In lenient mode, entries whose label is not a decimal integer or that lack
    /// `base`/`value` are skipped. In strict mode they are errors. Any entry that
    /// does carry `base` and `value` must decode cleanly in both modes.
    pub fn points(&self, strict: bool) -> Result<Vec<Point>, ShareError> {
        let mut points = Vec::with_capacity(self.entries.len());

        for (label, node) in &self.entries {
            if parse_label(label).is_none() {
                if strict {
                    return Err(ShareError::InvalidLabel {
                        label: label.clone(),
                    });
                }
                warn!(label = %label, "Skipping entry with a non-numeric label");
                continue;
            }

            if node.get("base").is_none() || node.get("value").is_none() {
                if strict {
                    return Err(ShareError::MalformedEntry {
                        label: label.clone(),
                        reason: "expected an object with `base` and `value`".to_string(),
                    });
                }
                warn!(label = %label, "Skipping entry without base or value");
                continue;
            }

            let entry: ShareEntry =
                serde_json::from_value(node.clone()).map_err(|e| ShareError::MalformedEntry {
                    label: label.clone(),
                    reason: e.to_string(),
                })?;
            let base = entry.base.to_radix(label)?;
            let point = Point::from_share(label, base, &entry.value).map_err(|source| {
                ShareError::InvalidShare {
                    label: label.clone(),
                    source,
                }
            })?;
            points.push(point);
        }

        if let Some(n) = self.keys.n {
            if n != points.len() {
                warn!(
                    declared = n,
                    found = points.len(),
                    "Share count does not match keys.n"
                );
            }
        }

        Ok(points)
    }
}

/// Parses `json`, decodes its shares and reconstructs the secret.
pub fn recover_secret(
    json: &str,
    strict: bool,
    interpolator: &Interpolator,
) -> Result<BigInt, ShareError> {
    let document = ShareDocument::from_json(json)?;
    let points = document.points(strict)?;
    info!(
        shares = points.len(),
        k = document.threshold(),
        "Reconstructing secret"
    );
    Ok(interpolator.interpolate_at_zero(&points, document.threshold())?)
}
