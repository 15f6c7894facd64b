// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reading share documents.
//!
//! A share document is a JSON object holding the threshold under `keys` and one
//! entry per share, keyed by the share's decimal x-coordinate:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```

mod document;
mod errors;

pub use document::*;
pub use errors::*;
